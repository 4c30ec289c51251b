use futures::future::BoxFuture;
use serde_json::Value;
use crate::Error;

/// A channel that can issue one named function call against an API area
/// and hand back the decoded response.
pub trait Call {
    fn call<'a>(&'a self, area: &'a str, function: &'a str, params: Value) -> BoxFuture<'a, Result<Value, Error>>;
}

impl<C: Call + ?Sized> Call for &C {
    fn call<'a>(&'a self, area: &'a str, function: &'a str, params: Value) -> BoxFuture<'a, Result<Value, Error>> {
        (**self).call(area, function, params)
    }
}
