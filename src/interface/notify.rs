use crate::error::MealError;

/// Category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Error,
    Info,
}

/// Modal-style notification shown when a fetch cannot render meal data.
#[derive(Debug, Clone)]
pub struct Notification {
    pub icon: Icon,
    pub title: String,
    pub body: String,
}

impl Notification {
    /// Map a pipeline error to its user-facing notification.
    ///
    /// Transport and API failures are errors; an empty day is plain info.
    pub fn from_error(err: &MealError) -> Self {
        match err {
            MealError::Transport { .. } => Self {
                icon: Icon::Error,
                title: "네트워크 오류".to_string(),
                body: "급식 정보를 가져오는 중 네트워크 오류가 발생했습니다. 다시 시도해주세요."
                    .to_string(),
            },
            MealError::Api { message, .. } => Self {
                icon: Icon::Error,
                title: "오류 발생!".to_string(),
                body: format!("급식 정보를 가져오는 중 오류가 발생했습니다: {message}"),
            },
            MealError::NoMealData => Self {
                icon: Icon::Info,
                title: "정보 없음".to_string(),
                body: "해당 날짜의 급식 정보가 없습니다.".to_string(),
            },
        }
    }

    /// Print the notification, errors to stderr and info to stdout.
    pub fn display(&self) {
        match self.icon {
            Icon::Error => eprintln!("❌ {}\n{}", self.title, self.body),
            Icon::Info => println!("ℹ️ {}\n{}", self.title, self.body),
        }
    }
}
