use log::info;
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{catch, get, post, Responder, State};
use rocket_dyn_templates::{context, Template};

use crate::domain::{Contact, ContactBook};
use crate::errors::AppError;
use crate::validation;
use crate::web::data::{ContactForm, UpdateContactForm};

/// A mutation either redirects with a flash message or re-renders the
/// originating form with the collected validation errors and the submitted
/// values preserved.
#[derive(Responder)]
pub enum FormResponse {
    Redirect(Flash<Redirect>),
    Invalid(Template),
}

#[get("/")]
pub fn index() -> Template {
    Template::render("index", context! { title: "Home" })
}

#[get("/contact")]
pub fn contact_list(
    book: &State<ContactBook>,
    flash: Option<FlashMessage<'_>>,
) -> Result<Template, AppError> {
    let contacts = book.load()?;
    let msg = flash.map(|f| f.message().to_string());

    Ok(Template::render(
        "contact",
        context! { title: "Contacts", contacts, msg },
    ))
}

#[get("/contact/add")]
pub fn add_contact_form() -> Template {
    Template::render(
        "add-contact",
        context! {
            title: "Add Contact",
            errors: Vec::<String>::new(),
            name: "",
            email: "",
            phone: "",
        },
    )
}

#[post("/contact", data = "<form>")]
pub fn create_contact(
    book: &State<ContactBook>,
    form: Form<ContactForm>,
) -> Result<FormResponse, AppError> {
    let form = form.into_inner();

    let duplicate = book.exists_by_name(&form.name)?;
    let errors = validation::validate_contact(&form.name, &form.email, &form.phone, duplicate)?;

    if !errors.is_empty() {
        return Ok(FormResponse::Invalid(Template::render(
            "add-contact",
            context! {
                title: "Add Contact",
                errors,
                name: form.name,
                email: form.email,
                phone: form.phone,
            },
        )));
    }

    book.add(Contact::new(&form.name, &form.email, &form.phone))?;
    info!("added contact {}", form.name);

    Ok(FormResponse::Redirect(Flash::success(
        Redirect::to("/contact"),
        "Contact added successfully",
    )))
}

#[get("/contact/edit/<name>")]
pub fn edit_contact_form(
    book: &State<ContactBook>,
    name: &str,
) -> Result<Option<Template>, AppError> {
    let Some(contact) = book.find(name)? else {
        return Ok(None);
    };

    Ok(Some(Template::render(
        "edit-contact",
        context! {
            title: "Edit Contact",
            errors: Vec::<String>::new(),
            old_name: contact.name.clone(),
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
        },
    )))
}

#[post("/contact/update", data = "<form>")]
pub fn update_contact(
    book: &State<ContactBook>,
    form: Form<UpdateContactForm>,
) -> Result<FormResponse, AppError> {
    let form = form.into_inner();

    // Keeping the name is fine; only a rename onto an existing name collides
    let duplicate = form.name != form.old_name && book.exists_by_name(&form.name)?;
    let errors = validation::validate_contact(&form.name, &form.email, &form.phone, duplicate)?;

    if !errors.is_empty() {
        return Ok(FormResponse::Invalid(Template::render(
            "edit-contact",
            context! {
                title: "Edit Contact",
                errors,
                old_name: form.old_name,
                name: form.name,
                email: form.email,
                phone: form.phone,
            },
        )));
    }

    book.update(&form.old_name, Contact::new(&form.name, &form.email, &form.phone))?;
    info!("updated contact {}", form.old_name);

    Ok(FormResponse::Redirect(Flash::success(
        Redirect::to("/contact"),
        "Contact updated successfully",
    )))
}

#[get("/contact/delete/<name>")]
pub fn delete_contact(
    book: &State<ContactBook>,
    name: &str,
) -> Result<Option<Flash<Redirect>>, AppError> {
    if book.find(name)?.is_none() {
        return Ok(None);
    }

    book.delete(name)?;
    info!("deleted contact {name}");

    Ok(Some(Flash::success(
        Redirect::to("/contact"),
        "Contact deleted successfully",
    )))
}

#[get("/contact/<name>")]
pub fn contact_detail(
    book: &State<ContactBook>,
    name: &str,
) -> Result<Option<Template>, AppError> {
    let Some(contact) = book.find(name)? else {
        return Ok(None);
    };

    Ok(Some(Template::render(
        "detail",
        context! { title: "Contact Detail", contact },
    )))
}

#[catch(404)]
pub fn not_found() -> Template {
    Template::render("404", context! { title: "Page Not Found" })
}
