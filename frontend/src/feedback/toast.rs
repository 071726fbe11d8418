/// The success banner. Each `show` hands out a ticket, and a timer holding an
/// older ticket cannot hide a newer message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    message: Option<String>,
    ticket: u64,
}

impl Toast {
    /// An empty message hides the banner.
    pub fn show(&mut self, message: String) -> u64 {
        self.ticket += 1;
        self.message = (!message.is_empty()).then_some(message);
        self.ticket
    }

    pub fn expire(&mut self, ticket: u64) {
        if self.ticket == ticket {
            self.message = None;
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
