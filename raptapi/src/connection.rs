use std::str;
use std::sync::Arc;
use futures::future::{BoxFuture, FutureExt};
use log::{debug, error};
use reqwest::{Client as HttpClient, Proxy};
use serde::{Serialize, Deserialize, de::DeserializeOwned};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use crate::{Call, Error};
use crate::config::{Config, Credentials};
use crate::serde::Response;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session with a Rapture server. Owns the HTTP client and the calling
/// context obtained by `login`; API accessors borrow it.
#[derive(Debug)]
pub struct Connection {
    client:      HttpClient,
    url:         String,
    login:       String,
    credentials: Credentials,
    session:     RwLock<Session>,
}

#[derive(Debug)]
enum Session {
    Some(Arc<Context>),
    None,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Context {
    pub context: String,
    pub user:    String,
    #[serde(default)]
    pub valid:   bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Challenge {
    context_id: String,
    salt:       String,
}

#[derive(Debug, Serialize)]
struct Request<'a, T> {
    function: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context:  Option<&'a str>,
    params:   T,
}

impl Connection {
    pub fn new(config: Config) -> Result<Self, Error> {
        let Config { url, credentials, timeout, proxy } = config;

        let mut client = HttpClient::builder();
        client = client.timeout(timeout);

        if let Some(proxy) = proxy.as_ref().map(Proxy::all) {
            client = client.proxy(proxy?);
        }

        Ok(Self {
            client:      client.build()?,
            login:       format!("{}/login", url),
            url:         url,
            credentials: credentials,
            session:     RwLock::new(Session::None),
        })
    }

    pub async fn login(&self) -> Result<Arc<Context>, Error> {
        #[derive(Serialize)]
        struct Prepare<'a> {
            user: &'a str,
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Login<'a> {
            user:               &'a str,
            digest:             String,
            context:            &'a str,
            client_api_version: &'a str,
        }

        *self.session.write().await = Session::None;

        let user = self.credentials.user.as_str();

        let challenge: Challenge = self.send(&self.login, &Request {
            function: "CONTEXT",
            context:  None,
            params:   Prepare { user },
        }).await?;

        let digest = digest(&self.credentials.password, &challenge.salt);

        let context: Context = self.send(&self.login, &Request {
            function: "LOGIN",
            context:  None,
            params:   Login {
                user:               user,
                digest:             digest,
                context:            &challenge.context_id,
                client_api_version: API_VERSION,
            },
        }).await?;

        if !context.valid {
            return Err(Error::Unauthorized);
        }

        debug!("logged in as {} with context {}", context.user, context.context);

        let context = Arc::new(context);
        let mut lock = self.session.write().await;
        *lock = Session::Some(context.clone());

        Ok(context)
    }

    pub async fn info(&self) -> Result<Value, Error> {
        self.send(&self.login, &Request {
            function: "INFO",
            context:  None,
            params:   Value::Object(Default::default()),
        }).await
    }

    pub async fn context(&self) -> Result<Arc<Context>, Error> {
        match &*(self.session.read().await) {
            Session::Some(context) => Ok(context.clone()),
            Session::None          => Err(Error::Session),
        }
    }

    async fn invoke(&self, area: &str, function: &str, params: Value) -> Result<Value, Error> {
        let context = self.context().await?;
        let url     = format!("{}/{}", self.url, area);

        debug!("{} {}", url, function);

        self.send(&url, &Request {
            function: function,
            context:  Some(&context.context),
            params:   params,
        }).await
    }

    async fn send<T: Serialize, U: DeserializeOwned>(&self, url: &str, body: &T) -> Result<U, Error> {
        let r = self.client.post(url).json(body).send().await?;

        let status = r.status();
        let body   = r.bytes().await?;

        if !status.is_success() {
            let body = str::from_utf8(&body).unwrap_or("<invalid>");
            return Err(Error::Status(status, body.to_owned()));
        }

        match json(&body)? {
            Response::Success(v) => Ok(v),
            Response::Failure(f) => Err(f.into()),
        }
    }
}

impl Call for Connection {
    fn call<'a>(&'a self, area: &'a str, function: &'a str, params: Value) -> BoxFuture<'a, Result<Value, Error>> {
        self.invoke(area, function, params).boxed()
    }
}

pub(crate) fn digest(password: &str, salt: &str) -> String {
    let inner = hex::encode(Sha256::digest(password.as_bytes()));
    let outer = Sha256::digest(format!("{}:{}", inner, salt).as_bytes());
    hex::encode(outer)
}

fn json<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, Error> {
    serde_json::from_slice(bytes).map_err(|e| {
        let json = str::from_utf8(bytes).unwrap_or("<invalid>");
        error!("{:?}: {}", e, json);
        Error::Transport(e.to_string())
    })
}
