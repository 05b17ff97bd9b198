use crate::task::{
  Category,
  Priority,
  Status
};

const DEFAULT_BADGE_CLASS: &str =
  "bg-gray-100 text-gray-800 border-gray-200";
const DEFAULT_CATEGORY_BADGE_CLASS:
  &str =
  "bg-gray-100 text-gray-800 border-gray-300";
const DEFAULT_CARD_CLASS: &str =
  "bg-gray-50 border-gray-200 shadow-gray-100";

impl Status {
  pub fn display_name(&self) -> &str {
    match self {
      | Status::Pending => "Bekleyen",
      | Status::InProgress => {
        "Devam Ediyor"
      }
      | Status::Completed => {
        "Tamamlandı"
      }
      | Status::Cancelled => {
        "İptal Edildi"
      }
      | Status::Unknown(raw) => raw
    }
  }

  pub fn badge_class(
    &self
  ) -> &'static str {
    match self {
      | Status::Completed => {
        "bg-green-100 text-green-800 border-green-200"
      }
      | Status::InProgress => {
        "bg-blue-100 text-blue-800 border-blue-200"
      }
      | Status::Pending => {
        "bg-gray-100 text-gray-800 border-gray-200"
      }
      | Status::Cancelled => {
        "bg-red-100 text-red-800 border-red-200"
      }
      | Status::Unknown(_) => {
        DEFAULT_BADGE_CLASS
      }
    }
  }

  pub fn card_class(
    &self
  ) -> &'static str {
    match self {
      | Status::Completed => {
        "bg-green-50 border-green-200 shadow-green-100"
      }
      | Status::InProgress => {
        "bg-blue-50 border-blue-200 shadow-blue-100"
      }
      | Status::Pending => {
        "bg-yellow-50 border-yellow-200 shadow-yellow-100"
      }
      | Status::Cancelled => {
        "bg-red-50 border-red-200 shadow-red-100"
      }
      | Status::Unknown(_) => {
        DEFAULT_CARD_CLASS
      }
    }
  }

  pub fn icon(&self) -> &'static str {
    match self {
      | Status::Pending => "⏳",
      | Status::InProgress => "🔄",
      | Status::Completed => "✅",
      | Status::Cancelled => "❌",
      | Status::Unknown(_) => ""
    }
  }
}

impl Priority {
  pub fn display_name(&self) -> &str {
    match self {
      | Priority::Urgent => "Acil",
      | Priority::High => "Yüksek",
      | Priority::Medium => "Orta",
      | Priority::Low => "Düşük",
      | Priority::Unknown(raw) => raw
    }
  }

  pub fn badge_class(
    &self
  ) -> &'static str {
    match self {
      | Priority::Urgent => {
        "bg-red-100 text-red-800 border-red-200"
      }
      | Priority::High => {
        "bg-orange-100 text-orange-800 border-orange-200"
      }
      | Priority::Medium => {
        "bg-yellow-100 text-yellow-800 border-yellow-200"
      }
      | Priority::Low => {
        "bg-green-100 text-green-800 border-green-200"
      }
      | Priority::Unknown(_) => {
        DEFAULT_BADGE_CLASS
      }
    }
  }

  pub fn icon(&self) -> &'static str {
    match self {
      | Priority::Urgent => "🚨",
      | Priority::High => "🔴",
      | Priority::Medium => "🟡",
      | Priority::Low => "🟢",
      | Priority::Unknown(_) => ""
    }
  }
}

impl Category {
  pub fn display_name(&self) -> &str {
    match self {
      | Category::Work => "İş",
      | Category::Personal => {
        "Kişisel"
      }
      | Category::Shopping => {
        "Alışveriş"
      }
      | Category::Health => "Sağlık",
      | Category::Education => {
        "Eğitim"
      }
      | Category::Finance => "Finans",
      | Category::Travel => "Seyahat",
      | Category::Other => "Diğer",
      | Category::Unknown(raw) => raw
    }
  }

  pub fn badge_class(
    &self
  ) -> &'static str {
    match self {
      | Category::Work => {
        "bg-blue-100 text-blue-800 border-blue-300"
      }
      | Category::Personal => {
        "bg-purple-100 text-purple-800 border-purple-300"
      }
      | Category::Shopping => {
        "bg-pink-100 text-pink-800 border-pink-300"
      }
      | Category::Health => {
        "bg-green-100 text-green-800 border-green-300"
      }
      | Category::Education => {
        "bg-yellow-100 text-yellow-800 border-yellow-300"
      }
      | Category::Finance => {
        "bg-emerald-100 text-emerald-800 border-emerald-300"
      }
      | Category::Travel => {
        "bg-cyan-100 text-cyan-800 border-cyan-300"
      }
      | Category::Other => {
        DEFAULT_CATEGORY_BADGE_CLASS
      }
      | Category::Unknown(_) => {
        DEFAULT_CATEGORY_BADGE_CLASS
      }
    }
  }

  pub fn icon(&self) -> &'static str {
    match self {
      | Category::Work => "💼",
      | Category::Personal => "👤",
      | Category::Shopping => "🛒",
      | Category::Health => "🏥",
      | Category::Education => "📚",
      | Category::Finance => "💰",
      | Category::Travel => "✈️",
      | Category::Other => "📝",
      | Category::Unknown(_) => ""
    }
  }
}
