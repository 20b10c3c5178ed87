pub mod generate_program;
pub mod show_form;
pub mod submit_form;
