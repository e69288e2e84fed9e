//! Request field validation.
//!
//! Each request body is described by a `*Draft` type with optional fields,
//! exactly as it was posted. `validate()` runs a chain of checks per field and
//! keeps only the first failure for each one, producing either the typed,
//! trimmed input or a [`ValidationErrors`] list.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{MAX_USERNAME_LEN, RecordId, Tag, Username};

pub const TITLE_MAX: usize = 180;
pub const TEXT_MIN: usize = 10;
pub const TEXT_MAX: usize = 5000;
pub const PASSWORD_MIN: usize = 6;
pub const PASSWORD_MAX: usize = 50;
pub const DISPLAY_NAME_MAX: usize = 50;
pub const PROFILE_MAX: usize = 500;

/// A single failed field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            msg: msg.into(),
        }
    }
}

/// All failed fields of one request, first failure per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The message for `param`, if it failed.
    pub fn get(&self, param: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.param == param)
            .map(|e| e.msg.as_str())
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", e.param, e.msg)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Collects field checks for one request.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a check chain for `param`.
    pub fn field(&mut self, param: &'static str, value: Option<&str>) -> Check<'_> {
        Check {
            validator: self,
            param,
            value: value.map(str::to_string),
            failed: false,
        }
    }

    /// Record a failure computed outside a check chain.
    pub fn reject(&mut self, param: &'static str, msg: impl Into<String>) {
        if !self.errors.iter().any(|e| e.param == param) {
            self.errors.push(FieldError::new(param, msg));
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// A check chain over one field. Stops at the first failure.
pub struct Check<'a> {
    validator: &'a mut Validator,
    param: &'static str,
    value: Option<String>,
    failed: bool,
}

impl Check<'_> {
    fn check(mut self, ok: impl FnOnce(Option<&str>) -> bool, msg: &str) -> Self {
        if !self.failed && !ok(self.value.as_deref()) {
            self.validator.reject(self.param, msg);
            self.failed = true;
        }
        self
    }

    /// The field must be present.
    pub fn exists(self, msg: &str) -> Self {
        self.check(|v| v.is_some(), msg)
    }

    /// Trim surrounding whitespace from the value.
    pub fn trim(mut self) -> Self {
        self.value = self.value.map(|v| v.trim().to_string());
        self
    }

    /// The value must not be empty.
    pub fn not_empty(self, msg: &str) -> Self {
        self.check(|v| v.is_some_and(|v| !v.is_empty()), msg)
    }

    /// The value must be at least `min` characters, when present.
    pub fn min_len(self, min: usize, msg: &str) -> Self {
        self.check(|v| v.is_none_or(|v| v.chars().count() >= min), msg)
    }

    /// The value must be at most `max` characters, when present.
    pub fn max_len(self, max: usize, msg: &str) -> Self {
        self.check(|v| v.is_none_or(|v| v.chars().count() <= max), msg)
    }

    /// The value must satisfy `pred`, when present.
    pub fn matches(self, pred: impl Fn(&str) -> bool, msg: &str) -> Self {
        self.check(|v| v.is_none_or(pred), msg)
    }

    /// The checked value, or `None` if the chain failed or the field is absent.
    pub fn value(self) -> Option<String> {
        if self.failed { None } else { self.value }
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// A question as posted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuestionDraft {
    pub title: Option<String>,
    pub text: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A validated new question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub text: String,
    pub tags: Vec<Tag>,
}

impl QuestionDraft {
    pub fn validate(&self) -> Result<NewQuestion, ValidationErrors> {
        let mut v = Validator::new();
        let title = title_chain(&mut v, self.title.as_deref());
        let text = text_chain(&mut v, self.text.as_deref());

        let tags = match &self.tags {
            None => {
                v.reject("tags", "is required");
                None
            }
            Some(raw) => {
                let mut tags = Vec::with_capacity(raw.len());
                for t in raw {
                    match Tag::new(t) {
                        Ok(tag) if !tags.contains(&tag) => tags.push(tag),
                        Ok(_) => {}
                        Err(_) => {
                            v.reject("tags", format!("contains an invalid tag '{}'", t));
                            break;
                        }
                    }
                }
                Some(tags)
            }
        };

        v.finish()?;

        Ok(NewQuestion {
            title: title.unwrap_or_default(),
            text: text.unwrap_or_default(),
            tags: tags.unwrap_or_default(),
        })
    }
}

/// A blog post as posted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogDraft {
    pub title: Option<String>,
    pub text: Option<String>,
}

/// A validated blog post body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub text: String,
}

impl BlogDraft {
    pub fn validate(&self) -> Result<NewBlog, ValidationErrors> {
        let mut v = Validator::new();
        let title = title_chain(&mut v, self.title.as_deref());
        let text = text_chain(&mut v, self.text.as_deref());
        v.finish()?;

        Ok(NewBlog {
            title: title.unwrap_or_default(),
            text: text.unwrap_or_default(),
        })
    }
}

fn title_chain(v: &mut Validator, title: Option<&str>) -> Option<String> {
    v.field("title", title)
        .exists("is required")
        .trim()
        .not_empty("cannot be blank")
        .max_len(TITLE_MAX, "must be at most 180 characters long")
        .value()
}

fn text_chain(v: &mut Validator, text: Option<&str>) -> Option<String> {
    v.field("text", text)
        .exists("is required")
        .trim()
        .min_len(TEXT_MIN, "must be at least 10 characters long")
        .max_len(TEXT_MAX, "must be at most 5000 characters long")
        .value()
}

/// Username and password as posted to sign up or authenticate.
#[derive(Clone, Default, Deserialize)]
pub struct SignupDraft {
    pub username: Option<String>,
    pub password: Option<String>,
}

// Hide password in Debug output
impl fmt::Debug for SignupDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupDraft")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl SignupDraft {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// Validate, returning the normalized username and the trimmed password.
    pub fn validate(&self) -> Result<(Username, String), ValidationErrors> {
        let mut v = Validator::new();

        let username = v
            .field("username", self.username.as_deref())
            .exists("is required")
            .trim()
            .not_empty("cannot be blank")
            .max_len(MAX_USERNAME_LEN, "must be at most 16 characters long")
            .matches(
                |s| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
                "contains invalid characters",
            )
            .value();

        let password = v
            .field("password", self.password.as_deref())
            .exists("is required")
            .trim()
            .not_empty("cannot be blank")
            .min_len(PASSWORD_MIN, "must be at least 6 characters long")
            .max_len(PASSWORD_MAX, "must be at most 50 characters long")
            .value();

        let username = username.and_then(|u| Username::new(u).ok());
        if username.is_none() {
            v.reject("username", "contains invalid characters");
        }

        v.finish()?;

        match (username, password) {
            (Some(username), Some(password)) => Ok((username, password)),
            _ => Err(ValidationErrors(vec![FieldError::new(
                "username",
                "is required",
            )])),
        }
    }
}

/// A follow toggle as posted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FollowDraft {
    pub followee: Option<String>,
}

impl FollowDraft {
    pub fn new(followee: impl Into<String>) -> Self {
        Self {
            followee: Some(followee.into()),
        }
    }

    pub fn validate(&self) -> Result<RecordId, ValidationErrors> {
        let mut v = Validator::new();
        let followee = v
            .field("followee", self.followee.as_deref())
            .exists("is required")
            .trim()
            .not_empty("is required")
            .value();

        let followee = followee.and_then(|f| RecordId::new(f).ok());
        if followee.is_none() {
            v.reject("followee", "is invalid");
        }
        v.finish()?;

        followee.ok_or_else(|| ValidationErrors(vec![FieldError::new("followee", "is invalid")]))
    }
}

/// Profile fields a user may edit on their own account.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEdit {
    pub display_name: Option<String>,
    pub profile: Option<String>,
    pub exp: Option<String>,
}

impl ProfileEdit {
    /// Validate, returning the trimmed edit.
    pub fn validate(&self) -> Result<ProfileEdit, ValidationErrors> {
        let mut v = Validator::new();

        let display_name = v
            .field("displayName", self.display_name.as_deref())
            .trim()
            .max_len(DISPLAY_NAME_MAX, "must be at most 50 characters long")
            .value();

        let profile = v
            .field("profile", self.profile.as_deref())
            .trim()
            .max_len(PROFILE_MAX, "must be at most 500 characters long")
            .value();

        let exp = v.field("exp", self.exp.as_deref()).trim().value();

        v.finish()?;

        Ok(ProfileEdit {
            display_name: display_name.filter(|s| !s.is_empty()),
            profile,
            exp,
        })
    }
}
