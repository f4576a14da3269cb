//! Drives a small sign-up form through a typical interaction and prints
//! what a renderer would show after each step.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use validatable::prelude::*;

fn show(form: &Form, step: &str) {
    println!("-- {step}");
    for (name, field) in form.fields() {
        let visible = field.visible_messages();
        let messages: Vec<&str> = visible.iter().flatten().map(String::as_str).collect();
        println!(
            "   {name:<10} state={:?} messages={:?}",
            field.validation_state(),
            messages
        );
    }
}

fn main() -> validatable::Result<()> {
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut form = Form::new();
    form.add(
        "username",
        ValidationState::builder(
            FieldConfig::new()
                .rule(Rule::required("Username is required"))
                .rule(Rule::min_length(3, "At least 3 characters"))
                .rule(Rule::pattern("^[a-z0-9_]*$", "Lowercase letters, digits and _ only")?),
        )
        .name("username")
        .color(Color::parse("#4a90d9")?)
        .build(),
    )?;
    form.add(
        "email",
        ValidationState::builder(
            FieldConfig::new()
                .rule(Rule::required("Email is required"))
                .rule(Rule::email("Please enter a valid email"))
                .validate_on_blur(),
        )
        .name("email")
        .build(),
    )?;
    form.add(
        "terms",
        ValidationState::builder(FieldConfig::new().rule(Rule::checked("You must accept the terms")))
            .name("terms")
            .value(false)
            .build(),
    )?;

    show(&form, "initial");

    let username = form.field_mut("username")?;
    username.set_focused(true);
    username.set_input_value("Fe");
    show(&form, "typing username");

    let email = form.field_mut("email")?;
    email.set_focused(true);
    email.set_input_value("ferris@");
    show(&form, "typing email (validates on blur)");

    form.field_mut("email")?.set_focused(false);
    show(&form, "email blurred");

    let result = form.validate(true);
    show(&form, "submit");
    for error in result.errors() {
        println!("   invalid: {} ({:?})", error.field_name, error.message);
    }

    form.reset();
    for (name, event) in form.watch_errors() {
        if let FieldEvent::Input(value) = event {
            form.field_mut(&name)?.set_input_value(value);
        }
    }
    form.settle();
    show(&form, "reset");

    Ok(())
}
