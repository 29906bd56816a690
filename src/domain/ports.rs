use crate::domain::model::{Request, Response, SourceDocument};
use crate::utils::error::Result;
use std::path::Path;

pub trait SourceLoader {
    fn load(&self, path: &Path) -> Result<SourceDocument>;
}

/// A single blocking request/response exchange with a language model.
pub trait ModelClient {
    fn complete(&self, request: &Request) -> Result<Response>;
}

impl<M: ModelClient + ?Sized> ModelClient for &M {
    fn complete(&self, request: &Request) -> Result<Response> {
        (**self).complete(request)
    }
}

impl<M: ModelClient + ?Sized> ModelClient for Box<M> {
    fn complete(&self, request: &Request) -> Result<Response> {
        (**self).complete(request)
    }
}
