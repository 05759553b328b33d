//! Form validation.
//!
//! Every form has a fixed, named field set, and its error type mirrors
//! those fields one-to-one instead of using an arbitrary-keyed map. A form
//! validates into the record-ready value or the full set of field errors.

use chrono::{DateTime, Utc};

use crate::models::{Budget, UserRole, ValidatedBid, ValidatedProject};

pub const MIN_DESCRIPTION_LEN: usize = 50;
pub const MIN_PROPOSAL_LEN: usize = 50;
pub const MIN_PASSWORD_LEN: usize = 6;

// ============================================================================
// Project form
// ============================================================================

/// Raw input of the post-a-project form.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub budget_min: u32,
    pub budget_max: u32,
    pub deadline: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFormErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget_min: Option<String>,
    pub budget_max: Option<String>,
    pub deadline: Option<String>,
    pub tags: Option<String>,
}

impl ProjectFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.budget_min.is_none()
            && self.budget_max.is_none()
            && self.deadline.is_none()
            && self.tags.is_none()
    }
}

impl ProjectForm {
    /// Validate against `now`; the deadline may be today but not earlier.
    pub fn validate(self, now: DateTime<Utc>) -> Result<ValidatedProject, ProjectFormErrors> {
        let mut errors = ProjectFormErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".into());
        }

        if self.description.trim().is_empty() {
            errors.description = Some("Description is required".into());
        } else if self.description.len() < MIN_DESCRIPTION_LEN {
            errors.description = Some(format!(
                "Description should be at least {} characters",
                MIN_DESCRIPTION_LEN
            ));
        }

        if self.budget_min == 0 {
            errors.budget_min = Some("Minimum budget is required".into());
        }
        if self.budget_max == 0 {
            errors.budget_max = Some("Maximum budget is required".into());
        } else if self.budget_max < self.budget_min {
            errors.budget_max =
                Some("Maximum budget cannot be less than minimum budget".into());
        }

        match self.deadline {
            None => errors.deadline = Some("Deadline is required".into()),
            Some(deadline) if deadline.date_naive() < now.date_naive() => {
                errors.deadline = Some("Deadline cannot be in the past".into());
            }
            Some(_) => {}
        }

        if self.tags.is_empty() {
            errors.tags = Some("At least one tag is required".into());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedProject {
            title: self.title,
            description: self.description,
            budget: Budget { min: self.budget_min, max: self.budget_max },
            deadline: self.deadline.unwrap(),
            tags: self.tags,
        })
    }
}

// ============================================================================
// Bid form
// ============================================================================

/// Raw input of the place-a-bid form.
#[derive(Debug, Clone, Default)]
pub struct BidForm {
    pub amount: u32,
    pub delivery_days: u32,
    pub proposal: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BidFormErrors {
    pub amount: Option<String>,
    pub delivery_days: Option<String>,
    pub proposal: Option<String>,
}

impl BidFormErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.delivery_days.is_none() && self.proposal.is_none()
    }
}

impl BidForm {
    pub fn validate(self) -> Result<ValidatedBid, BidFormErrors> {
        let mut errors = BidFormErrors::default();

        if self.amount == 0 {
            errors.amount = Some("Bid amount must be greater than 0".into());
        }
        if self.delivery_days == 0 {
            errors.delivery_days = Some("Delivery time must be greater than 0".into());
        }

        if self.proposal.trim().is_empty() {
            errors.proposal = Some("Proposal is required".into());
        } else if self.proposal.len() < MIN_PROPOSAL_LEN {
            errors.proposal = Some(format!(
                "Proposal should be at least {} characters",
                MIN_PROPOSAL_LEN
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedBid {
            amount: self.amount,
            delivery_days: self.delivery_days,
            proposal: self.proposal,
        })
    }
}

// ============================================================================
// Registration form
// ============================================================================

/// Raw input of the registration form.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFormErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirm: Option<String>,
}

impl RegisterFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.password_confirm.is_none()
    }
}

/// Registration fields that have passed validation. The password is not
/// carried further: the snapshot stores no credentials.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl RegisterForm {
    pub fn validate(self) -> Result<ValidatedRegistration, RegisterFormErrors> {
        let mut errors = RegisterFormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Name is required".into());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".into());
        } else if !email_looks_valid(&self.email) {
            errors.email = Some("Email is invalid".into());
        }

        if self.password.is_empty() {
            errors.password = Some("Password is required".into());
        } else if self.password.len() < MIN_PASSWORD_LEN {
            errors.password = Some(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }

        if self.password != self.password_confirm {
            errors.password_confirm = Some("Passwords do not match".into());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidatedRegistration {
            name: self.name,
            email: self.email,
            role: self.role,
        })
    }
}

/// Loose shape check: non-blank local part and a dot somewhere in the
/// domain, no whitespace anywhere.
fn email_looks_valid(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}
