//! Method call representation
//!
//! A call site found inside a method body. The receiver is kept exactly as
//! written so the dependency resolver can decide later what it refers to:
//!
//! - `None` for unqualified calls such as `logAccess()`
//! - `Some("this")` for explicit self calls such as `this.validate()`
//! - `Some(name)` for calls on another receiver such as `userService.getUsers()`

use serde::{Deserialize, Serialize};

/// Receiver text used for explicit self calls
pub const SELF_RECEIVER: &str = "this";

/// Represents a method call with its receiver
///
/// # Examples
///
/// ```rust
/// use classdeps::parsing::MethodCall;
///
/// // Instance call: repository.save(user)
/// let call = MethodCall::new("save", 12).with_receiver("repository");
/// assert_eq!(call.qualified_name(), "repository.save");
///
/// // Unqualified call: validate()
/// let call = MethodCall::new("validate", 13);
/// assert_eq!(call.receiver, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodCall {
    /// The receiver identifier, `"this"`, or `None` for unqualified calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    /// The method being called, without qualification
    pub method_name: String,

    /// 1-indexed line of the method name
    pub line: u32,
}

impl MethodCall {
    /// Creates an unqualified call
    pub fn new(method_name: &str, line: u32) -> Self {
        Self {
            receiver: None,
            method_name: method_name.to_string(),
            line,
        }
    }

    /// Sets the receiver for this method call
    pub fn with_receiver(mut self, receiver: &str) -> Self {
        self.receiver = Some(receiver.to_string());
        self
    }

    /// `receiver.method` or just `method`
    #[must_use = "The formatted name should be used"]
    pub fn qualified_name(&self) -> String {
        match &self.receiver {
            Some(receiver) => format!("{}.{}", receiver, self.method_name),
            None => self.method_name.clone(),
        }
    }
}
