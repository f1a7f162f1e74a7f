use std::io::{BufRead, Write};

use anyhow::Result;
use shared::protocol::RequestFields;
use tokio::runtime::Runtime;

use crate::{
    controller::{
        actions::{load_requests, submit_request, IntakeBackend},
        events::UiEvent,
    },
    ui::{
        menu::{render_menu, View},
        prompt::Prompter,
        render::{render_about, render_event, render_home},
    },
};

pub struct IntakeApp<B> {
    backend: B,
    runtime: Runtime,
}

impl<B: IntakeBackend> IntakeApp<B> {
    pub fn new(backend: B, runtime: Runtime) -> Self {
        Self { backend, runtime }
    }

    /// Menu loop. Ends on Quit or when input is exhausted.
    pub fn run<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<()> {
        prompter.say(&render_home())?;
        loop {
            prompter.say(&render_menu())?;
            let Some(choice) = prompter.ask("Select")? else {
                break;
            };
            match View::from_choice(&choice) {
                Some(View::Quit) => break,
                Some(view) => {
                    if !self.show(view, prompter)? {
                        break;
                    }
                }
                None => prompter.say(&format!("Unknown menu choice '{}'.", choice.trim()))?,
            }
        }
        Ok(())
    }

    /// Returns `false` when input ran out mid-view.
    fn show<R: BufRead, W: Write>(&self, view: View, prompter: &mut Prompter<R, W>) -> Result<bool> {
        match view {
            View::Home => prompter.say(&render_home())?,
            View::About => prompter.say(&render_about())?,
            View::ViewRequests => {
                let event = self.list();
                prompter.say(&render_event(&event))?;
            }
            View::RequestService => {
                prompter.say("Create a New Service Request")?;
                let Some(fields) = read_request_form(prompter)? else {
                    return Ok(false);
                };
                match prompter.confirm("Submit request")? {
                    Some(true) => {
                        let event = self.submit(&fields);
                        prompter.say(&render_event(&event))?;
                    }
                    Some(false) => prompter.say("Submission cancelled.")?,
                    None => return Ok(false),
                }
            }
            View::Quit => {}
        }
        Ok(true)
    }

    pub fn submit(&self, fields: &RequestFields) -> UiEvent {
        self.runtime.block_on(submit_request(&self.backend, fields))
    }

    pub fn list(&self) -> UiEvent {
        self.runtime.block_on(load_requests(&self.backend))
    }
}

fn read_request_form<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<Option<RequestFields>> {
    let Some(name) = prompter.ask("Your Name")? else {
        return Ok(None);
    };
    let Some(contact) = prompter.ask("Contact Number")? else {
        return Ok(None);
    };
    let Some(appliance) = prompter.choose_appliance()? else {
        return Ok(None);
    };
    let Some(issue) = prompter.ask("Describe the Issue")? else {
        return Ok(None);
    };
    Ok(Some(RequestFields::new(name, contact, appliance, issue)))
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
