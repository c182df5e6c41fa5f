pub mod data;
mod handlers;

use rocket::figment::Figment;
use rocket::{catchers, routes, Build, Rocket};
use rocket_dyn_templates::Template;

use crate::config::Config;
use crate::domain::ContactBook;

pub fn rocket(conf: &Config, book: ContactBook) -> Rocket<Build> {
    let figment = Figment::from(rocket::Config::default())
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    rocket::custom(figment)
        .manage(book)
        .attach(Template::fairing())
        .register("/", catchers![handlers::not_found])
        .mount(
            "/",
            routes![
                handlers::index,
                handlers::contact_list,
                handlers::add_contact_form,
                handlers::create_contact,
                handlers::edit_contact_form,
                handlers::update_contact,
                handlers::delete_contact,
                handlers::contact_detail,
            ],
        )
}
