// Capture modal view-model

use crate::capture::CaptureForm;

#[derive(Debug, Clone, PartialEq)]
pub struct CaptureModalView {
    pub heading: &'static str,
    pub prompt: String,
    pub email: String,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error: Option<String>,
    pub disclaimer: &'static str,
}

pub fn capture_modal(form: &CaptureForm) -> CaptureModalView {
    CaptureModalView {
        heading: "Get Your Tickets",
        prompt: format!("Enter your email to continue to {}", form.event_title),
        email: form.email.clone(),
        submit_label: if form.is_submitting {
            "Processing..."
        } else {
            "Continue to Tickets"
        },
        submit_disabled: form.is_submitting,
        error: form.error.clone(),
        disclaimer: "We'll send you updates about similar events. Unsubscribe anytime.",
    }
}
