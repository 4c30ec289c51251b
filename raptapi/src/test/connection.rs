use std::time::Duration;
use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use tokio_test::block_on;
use crate::{Config, Connection, Credentials, Error, UserApi};
use crate::connection::digest;
use super::server::{self, server};

fn connect(url: &str, user: &str, password: &str) -> Result<Connection> {
    let mut config = Config::new(url, Credentials::new(user, password));
    config.timeout = Duration::from_secs(5);
    Ok(Connection::new(config)?)
}

#[test]
fn digest_is_salted() {
    let a = digest("password", "salt-a");
    let b = digest("password", "salt-b");
    assert_eq!(64, a.len());
    assert_ne!(a, b);
    assert_eq!(a, digest("password", "salt-a"));
}

#[test]
fn new_issues_no_request() -> Result<()> {
    block_on(async {
        let server = server("rapture", "rapture").await?;
        let _conn  = connect(&server.url(), "rapture", "rapture")?;

        assert_eq!(0, server.logins());
        assert_eq!(0, server.requests());

        Ok(())
    })
}

#[test]
fn login_and_who_am_i() -> Result<()> {
    block_on(async {
        let server = server("rapture", "hunter2").await?;
        let conn   = connect(&server.url(), "rapture", "hunter2")?;

        let context = conn.login().await?;
        assert_eq!(server::CONTEXT, context.context);
        assert_eq!("rapture", context.user);
        assert_eq!(1, server.logins());

        let api = UserApi::new(&conn);
        let who = api.get_who_am_i().await?;

        assert_eq!(json!("rapture"), who["username"]);
        assert_eq!(json!("rapture@example.com"), who["emailAddress"]);
        assert_eq!(1, server.requests());

        api.get_who_am_i().await?;
        assert_eq!(2, server.requests());

        Ok(())
    })
}

#[test]
fn bad_password_unauthorized() -> Result<()> {
    block_on(async {
        let server = server("rapture", "hunter2").await?;
        let conn   = connect(&server.url(), "rapture", "wrong")?;

        assert!(matches!(conn.login().await, Err(Error::Unauthorized)));
        assert!(matches!(conn.context().await, Err(Error::Session)));

        Ok(())
    })
}

#[test]
fn failed_relogin_clears_session() -> Result<()> {
    block_on(async {
        let server = server("rapture", "hunter2").await?;
        let conn   = connect(&server.url(), "rapture", "hunter2")?;

        conn.login().await?;
        assert!(conn.context().await.is_ok());

        server.deny(true);
        assert!(matches!(conn.login().await, Err(Error::Unauthorized)));
        assert!(matches!(conn.context().await, Err(Error::Session)));

        let api = UserApi::new(&conn);
        assert!(matches!(api.get_who_am_i().await, Err(Error::Session)));
        assert_eq!(0, server.requests());

        Ok(())
    })
}

#[test]
fn who_am_i_requires_session() -> Result<()> {
    block_on(async {
        let server = server("rapture", "rapture").await?;
        let conn   = connect(&server.url(), "rapture", "rapture")?;

        let api = UserApi::new(&conn);
        assert!(matches!(api.get_who_am_i().await, Err(Error::Session)));
        assert_eq!(0, server.requests());

        Ok(())
    })
}

#[test]
fn info_without_login() -> Result<()> {
    block_on(async {
        let server = server("rapture", "rapture").await?;
        let conn   = connect(&server.url(), "rapture", "rapture")?;

        let info = conn.info().await?;
        assert_eq!(json!("3.0.0"), info["version"]);
        assert_eq!(0, server.logins());

        Ok(())
    })
}

#[test]
fn unknown_area_is_status_error() -> Result<()> {
    block_on(async {
        let server = server("rapture", "rapture").await?;
        let conn   = connect(&server.url(), "rapture", "rapture")?;
        conn.login().await?;

        match crate::Call::call(&conn, "nowhere", "GETWHOAMI", json!({})).await {
            Err(Error::Status(status, _)) => assert_eq!(StatusCode::NOT_FOUND, status),
            other                         => panic!("unexpected result {:?}", other),
        }

        Ok(())
    })
}

#[test]
fn application_error_surfaces() -> Result<()> {
    block_on(async {
        let server = server("rapture", "rapture").await?;
        let conn   = connect(&server.url(), "rapture", "rapture")?;
        conn.login().await?;

        match crate::Call::call(&conn, "user", "GETNOTHING", json!({})).await {
            Err(Error::Application(a)) => {
                assert_eq!(400, a.code);
                assert_eq!("unknown function", a.message);
            }
            other => panic!("unexpected result {:?}", other),
        }

        Ok(())
    })
}

#[test]
fn unreachable_server_is_transport_error() -> Result<()> {
    block_on(async {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr     = listener.local_addr()?;
        drop(listener);

        let conn = connect(&format!("http://{}/rapture", addr), "rapture", "rapture")?;
        assert!(matches!(conn.info().await, Err(Error::Transport(_))));

        Ok(())
    })
}
