extern crate flashcards;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use std::io;
use structopt::StructOpt;

use flashcards::{
    db,
    service::{routes, AppState},
};

#[derive(Debug, StructOpt)]
#[structopt(name = "flashcards")]
struct Opt {
    #[structopt(
        short = "u",
        long = "db-url",
        env = "DATABASE_URL",
        default_value = "flashcards.db"
    )]
    database_url: String,
    #[structopt(
        short = "s",
        long = "socket",
        env = "BIND_ADDRESS",
        default_value = "127.0.0.1:5000"
    )]
    socket: String,
    #[structopt(long = "jwt-secret", env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,
    #[structopt(long = "pool-size", env = "POOL_SIZE", default_value = "8")]
    pool_size: u32,
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    let pool = db::connect(&opt.database_url, opt.pool_size).map_err(|err| {
        error!("Failed to open database: {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;
    let data = Data::new(AppState::new(pool, &opt.jwt_secret));

    let url = opt.socket;

    info!("Flashcards running at: http://{}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(routes)
    })
    .bind(&url)?
    .run()
    .await
}
