use rocket::FromForm;

#[derive(FromForm, Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(FromForm, Debug, Clone)]
pub struct UpdateContactForm {
    pub old_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}
