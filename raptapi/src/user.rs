use serde_json::{Map, Value};
use crate::{Call, Error};

const AREA: &str = "user";

/// Typed access to the user area of a Rapture server. Borrows a connection
/// owned elsewhere.
#[derive(Debug)]
pub struct UserApi<'c, C: ?Sized> {
    connection: &'c C,
}

impl<'c, C: Call + ?Sized> UserApi<'c, C> {
    pub fn new(connection: &'c C) -> Self {
        Self { connection }
    }

    /// Identity of the caller as reported by the server. Every call is a
    /// fresh request.
    pub async fn get_who_am_i(&self) -> Result<Value, Error> {
        let params = Value::Object(Map::new());
        self.connection.call(AREA, "GETWHOAMI", params).await
    }
}

impl<'c, C: ?Sized> Clone for UserApi<'c, C> {
    fn clone(&self) -> Self {
        Self { connection: self.connection }
    }
}

impl<'c, C: ?Sized> Copy for UserApi<'c, C> {}
