use clap::Parser;
use dotenv::dotenv;
use log::info;

use contact_book::config::Config;
use contact_book::domain::ContactBook;
use contact_book::store::JsonStore;
use contact_book::web;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let conf = Config::parse();

    let store = JsonStore::new(conf.contacts_file())?;
    let book = ContactBook::new(Box::new(store));

    info!("Server is running on {}", conf.http_listen_url());

    let _ = web::rocket(&conf, book).launch().await?;

    Ok(())
}
