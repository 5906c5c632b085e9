//! Dry-run back end: records commands instead of performing them

use super::{Automation, Command};
use crate::interpreter::ScreenSize;
use crate::utils::Result;

#[derive(Debug, Clone, Default)]
pub struct DryRun {
    screen: Option<ScreenSize>,
    executed: Vec<Command>,
}

impl DryRun {
    pub fn new(screen: Option<ScreenSize>) -> Self {
        Self {
            screen,
            executed: Vec::new(),
        }
    }

    /// Commands received so far, in order
    pub fn executed(&self) -> &[Command] {
        &self.executed
    }

    pub fn clear(&mut self) {
        self.executed.clear();
    }
}

impl Automation for DryRun {
    fn execute(&mut self, command: &Command) -> Result<()> {
        log::info!("[dry-run] {}", command);
        self.executed.push(command.clone());
        Ok(())
    }

    fn screen_size(&self) -> Option<ScreenSize> {
        self.screen
    }
}
