use std::time::Duration;
use anyhow::{anyhow, Result};
use raptapi::{Config, Connection, Credentials, UserApi};
use tracing::debug;
use crate::args::Args;

pub use output::{render, Format};

const DEFAULT_URL: &str = "http://localhost:8665/rapture";

pub async fn whoami(args: &Args<'_, '_>, sub: Args<'_, '_>) -> Result<()> {
    let format = sub.arg::<Format>("output")?;
    let config = config(args)?;

    if config.credentials.user.is_empty() {
        return Err(anyhow!("login user required (--user or RAPTURE_USER)"));
    }

    let conn = Connection::new(config)?;
    let ctx  = conn.login().await?;
    debug!(user = %ctx.user, context = %ctx.context, "logged in");

    let api = UserApi::new(&conn);
    let who = api.get_who_am_i().await?;

    println!("{}", render(&who, format)?);

    Ok(())
}

pub async fn info(args: &Args<'_, '_>, sub: Args<'_, '_>) -> Result<()> {
    let format = sub.arg::<Format>("output")?;
    let conn   = Connection::new(config(args)?)?;
    let info   = conn.info().await?;

    println!("{}", render(&info, format)?);

    Ok(())
}

pub fn config(args: &Args<'_, '_>) -> Result<Config> {
    let url      = args.opt::<String>("url")?.unwrap_or_else(|| DEFAULT_URL.to_owned());
    let user     = args.opt::<String>("user")?.unwrap_or_default();
    let password = args.opt::<String>("password")?.unwrap_or_default();

    let mut config = Config::new(&url, Credentials::new(&user, &password));

    if let Some(secs) = args.opt::<u64>("timeout")? {
        config.timeout = Duration::from_secs(secs);
    }
    config.proxy = args.opt("proxy")?;

    debug!(url = %config.url, user = %config.credentials.user, "connection config");

    Ok(config)
}

mod output;
