//! Status errors - the user-visible error taxonomy
//!
//! Every failure that reaches a client is a [`StatusError`]: a stable
//! [`ErrorCode`] plus named parameters used to fill the code's message
//! template in the caller's [`Language`].

use std::fmt;

use crate::value_objects::UserId;

/// Languages with message templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Resolve a single language tag such as `zh-CN` or `en_US`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "zh" => Some(Self::Zh),
            _ => None,
        }
    }

    /// Pick the first supported language from an `Accept-Language` value
    ///
    /// Quality weights are ignored; order of appearance wins. Falls back to
    /// English when nothing matches.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|item| item.split(';').next())
            .find_map(Self::from_tag)
            .unwrap_or_default()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }
}

/// Stable error identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    BadRequest,
    InvalidUserId,
    Unauthorized,
    Forbidden,
    NotFound,
    UserNotFound,
    Conflict,
    StatusBadGateway,
    DataOperationFailed,
}

impl ErrorCode {
    pub const ALL: [Self; 9] = [
        Self::BadRequest,
        Self::InvalidUserId,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::UserNotFound,
        Self::Conflict,
        Self::StatusBadGateway,
        Self::DataOperationFailed,
    ];

    /// Symbolic name, stable across releases
    pub const fn key(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::StatusBadGateway => "STATUS_BAD_GATEWAY",
            Self::DataOperationFailed => "DATA_OPERATION_FAILED",
        }
    }

    /// HTTP status family the error belongs to
    pub const fn status(self) -> u16 {
        match self {
            Self::BadRequest | Self::InvalidUserId => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound | Self::UserNotFound => 404,
            Self::Conflict => 409,
            Self::StatusBadGateway | Self::DataOperationFailed => 502,
        }
    }

    /// Numeric code reported to clients
    pub const fn code(self) -> u64 {
        match self {
            Self::BadRequest => 400_0000_0001,
            Self::InvalidUserId => 400_0000_0002,
            Self::Unauthorized => 401_0000_0001,
            Self::Forbidden => 403_0000_0001,
            Self::NotFound => 404_0000_0001,
            Self::UserNotFound => 404_0000_0002,
            Self::Conflict => 409_0000_0001,
            Self::StatusBadGateway => 502_0000_0001,
            Self::DataOperationFailed => 502_0000_0002,
        }
    }

    /// Message template; `{Name}` placeholders are filled from parameters
    pub const fn template(self, lang: Language) -> &'static str {
        match lang {
            Language::En => match self {
                Self::BadRequest => "bad request",
                Self::InvalidUserId => "invalid user ID, must be a positive integer",
                Self::Unauthorized => "unauthorized",
                Self::Forbidden => "forbidden",
                Self::NotFound => "not found",
                Self::UserNotFound => "user not found, user ID: {UserID}",
                Self::Conflict => "conflict",
                Self::StatusBadGateway => "operation failed, please retry later",
                Self::DataOperationFailed => "data operation failed, please retry later",
            },
            Language::Zh => match self {
                Self::BadRequest => "请求参数错误",
                Self::InvalidUserId => "用户ID无效，必须为正整数",
                Self::Unauthorized => "未授权，请先授权",
                Self::Forbidden => "禁止操作",
                Self::NotFound => "资源未找到",
                Self::UserNotFound => "用户不存在，用户ID：{UserID}",
                Self::Conflict => "资源冲突",
                Self::StatusBadGateway => "操作存在异常，请稍后重试",
                Self::DataOperationFailed => "数据操作存在异常，请稍后重试",
            },
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An [`ErrorCode`] with its message parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    code: ErrorCode,
    params: Vec<(&'static str, String)>,
    detail: Option<String>,
}

impl StatusError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            params: Vec::new(),
            detail: None,
        }
    }

    /// `UserNotFound` carrying the id for the `{UserID}` placeholder
    pub fn user_not_found(id: UserId) -> Self {
        Self::new(ErrorCode::UserNotFound).with_param("UserID", id)
    }

    /// `BadRequest` with a free-form description of what was wrong
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest).with_detail(detail)
    }

    pub fn with_param(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    /// Attach text appended after the localized message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Look up a message parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Render the message in the given language
    pub fn localize(&self, lang: Language) -> String {
        let mut message = self.code.template(lang).to_string();
        for (name, value) in &self.params {
            message = message.replace(&format!("{{{name}}}"), value);
        }
        if let Some(detail) = &self.detail {
            message.push_str(": ");
            message.push_str(detail);
        }
        message
    }
}

impl From<ErrorCode> for StatusError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.localize(Language::En))
    }
}

impl std::error::Error for StatusError {}
