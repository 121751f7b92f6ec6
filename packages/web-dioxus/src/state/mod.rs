//! Sign-in flow state

/// Step of the phone + OTP sign-in flow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthStep {
    #[default]
    Phone,
    Otp,
    Done,
}

/// State of one sign-in attempt, held in the page for its lifetime.
///
/// Transitions only advance when the corresponding network call succeeds; a
/// failed call leaves the step unchanged and records the error message. The
/// `loading` flag suppresses duplicate submissions while a call is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFlow {
    pub step: AuthStep,
    pub phone: String,
    pub code: String,
    pub token: String,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthFlow {
    /// Minimum phone input length before an OTP can be requested
    pub const MIN_PHONE_LEN: usize = 6;
    /// Minimum code input length before verification is attempted
    pub const MIN_CODE_LEN: usize = 4;

    /// Whether the "Send OTP" action is currently available
    pub fn can_request_otp(&self) -> bool {
        !self.loading && self.phone.chars().count() >= Self::MIN_PHONE_LEN
    }

    /// Whether the "Verify" action is currently available
    pub fn can_verify(&self) -> bool {
        !self.loading && self.code.chars().count() >= Self::MIN_CODE_LEN
    }

    /// Start the OTP request call. Returns `false` without side effects when a
    /// call is already in flight or the phone input is too short.
    pub fn begin_request(&mut self) -> bool {
        if self.step != AuthStep::Phone || !self.can_request_otp() {
            return false;
        }
        self.error = None;
        self.loading = true;
        true
    }

    /// Start the verification call. Same in-flight and length gating as
    /// [`begin_request`](Self::begin_request).
    pub fn begin_verify(&mut self) -> bool {
        if self.step != AuthStep::Otp || !self.can_verify() {
            return false;
        }
        self.error = None;
        self.loading = true;
        true
    }

    /// The OTP request succeeded: advance to the code entry step.
    pub fn otp_sent(&mut self) {
        self.loading = false;
        self.step = AuthStep::Otp;
    }

    /// Verification succeeded: record the session token and finish.
    pub fn verified(&mut self, token: String) {
        self.loading = false;
        self.token = token;
        self.step = AuthStep::Done;
    }

    /// A call failed: stay on the current step and surface the message.
    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Return from code entry to the phone step. Clears nothing: the entered
    /// number, the typed code, and any visible error all stay until the next
    /// submission.
    pub fn use_different_number(&mut self) {
        if self.step == AuthStep::Otp && !self.loading {
            self.step = AuthStep::Phone;
        }
    }
}
