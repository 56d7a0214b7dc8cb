pub mod json;
pub mod terminal;

use crate::report::Report;

pub trait Reporter {
    fn report(&self, report: &Report) -> String;
}
