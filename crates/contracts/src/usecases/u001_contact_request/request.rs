use serde::{Deserialize, Serialize};

/// Поле формы обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Ваше имя",
            ContactField::Email => "Email",
            ContactField::Message => "Сообщение",
        }
    }

    pub fn all() -> [ContactField; 3] {
        [ContactField::Name, ContactField::Email, ContactField::Message]
    }
}

/// Заполненная заявка, прошедшая проверку обязательных полей
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}
