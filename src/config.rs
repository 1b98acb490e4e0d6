use clap::Parser;
use std::env;

/// Runtime settings for the trivia API
#[derive(Parser, Debug, PartialEq, Eq)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Which errors we want to log (info, warn or error)
    #[clap(short, long, default_value = "warn")]
    pub log_level: String,
    /// Which PORT the server is listening to
    #[clap(short, long, default_value = "3030")]
    pub port: u16,
    /// Database user
    #[clap(long, default_value = "user")]
    pub db_user: String,
    /// Password for the database user
    #[clap(long, default_value = "root1234")]
    pub db_password: String,
    /// Host of the postgres database
    #[clap(long, default_value = "localhost")]
    pub db_host: String,
    /// PORT number for the database connection
    #[clap(long, default_value = "5432")]
    pub db_port: u16,
    /// Database name
    #[clap(long, default_value = "trivia")]
    pub db_name: String,
}

impl Config {
    /// Command line arguments first, `POSTGRES_*`/`PORT` environment
    /// variables (or an `.env` file) win over them.
    pub fn new() -> Result<Config, handle_errors::Error> {
        let config = Config::parse();

        let port = env::var("PORT")
            .ok()
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(config.port))
            .map_err(handle_errors::Error::ParseError)?;

        let db_user = env::var("POSTGRES_USER").unwrap_or_else(|_| config.db_user.to_owned());
        let db_password =
            env::var("POSTGRES_PASSWORD").unwrap_or_else(|_| config.db_password.to_owned());
        let db_host = env::var("POSTGRES_HOST").unwrap_or_else(|_| config.db_host.to_owned());
        let db_port = env::var("POSTGRES_PORT")
            .ok()
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(config.db_port))
            .map_err(handle_errors::Error::ParseError)?;
        let db_name = env::var("POSTGRES_DB").unwrap_or_else(|_| config.db_name.to_owned());

        Ok(Config {
            log_level: config.log_level,
            port,
            db_user,
            db_password,
            db_host,
            db_port,
            db_name,
        })
    }
}
