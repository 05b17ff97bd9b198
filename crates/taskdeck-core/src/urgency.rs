use chrono::{
  DateTime,
  Duration,
  Utc
};
use tracing::trace;

use crate::datetime::parse_timestamp_lenient;
use crate::task::{
  Status,
  Task
};

const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
pub enum SeverityTier {
  Overdue,
  WithinHour,
  WithinTwoHours,
  WithinSixHours,
  WithinTwelveHours,
  WithinDay,
  WithinTwoDays,
  WithinThreeDays,
  WithinWeek,
  WithinTwoWeeks,
  WithinMonth,
  Distant
}

const CASCADE: &[(i64, SeverityTier)] = &[
  (HOUR, SeverityTier::WithinHour),
  (
    2 * HOUR,
    SeverityTier::WithinTwoHours
  ),
  (
    6 * HOUR,
    SeverityTier::WithinSixHours
  ),
  (
    12 * HOUR,
    SeverityTier::WithinTwelveHours
  ),
  (24 * HOUR, SeverityTier::WithinDay),
  (
    2 * DAY,
    SeverityTier::WithinTwoDays
  ),
  (
    3 * DAY,
    SeverityTier::WithinThreeDays
  ),
  (7 * DAY, SeverityTier::WithinWeek),
  (
    14 * DAY,
    SeverityTier::WithinTwoWeeks
  ),
  (30 * DAY, SeverityTier::WithinMonth)
];

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Ribbon {
  pub label:       &'static str,
  pub icon:        &'static str,
  pub color_class: &'static str
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct UrgencyProjection {
  pub text_class:  &'static str,
  pub card_class:  &'static str,
  pub show_ribbon: bool,
  pub ribbon:      Option<Ribbon>
}

impl UrgencyProjection {
  pub const NEUTRAL: UrgencyProjection =
    UrgencyProjection {
      text_class:  "text-gray-600",
      card_class:  "",
      show_ribbon: false,
      ribbon:      None
    };

  fn from_tier(
    tier: SeverityTier
  ) -> Self {
    let show_ribbon =
      tier.shows_ribbon();
    UrgencyProjection {
      text_class: tier.text_class(),
      card_class: tier.card_class(),
      show_ribbon,
      ribbon: if show_ribbon {
        Some(tier.ribbon())
      } else {
        None
      }
    }
  }
}

impl SeverityTier {
  pub fn for_remaining(
    left: Duration
  ) -> SeverityTier {
    if left < Duration::zero() {
      return SeverityTier::Overdue;
    }
    for (bound, tier) in CASCADE {
      if left
        <= Duration::seconds(*bound)
      {
        return *tier;
      }
    }
    SeverityTier::Distant
  }

  pub fn shows_ribbon(self) -> bool {
    self <= SeverityTier::WithinDay
  }

  pub fn text_class(
    self
  ) -> &'static str {
    match self {
      | Self::Overdue => {
        "text-red-700 font-bold"
      }
      | Self::WithinHour => {
        "text-red-600 font-bold"
      }
      | Self::WithinTwoHours => {
        "text-red-500 font-bold"
      }
      | Self::WithinSixHours => {
        "text-red-500 font-semibold"
      }
      | Self::WithinTwelveHours => {
        "text-orange-600 font-semibold"
      }
      | Self::WithinDay => {
        "text-orange-500 font-semibold"
      }
      | Self::WithinTwoDays => {
        "text-orange-500 font-medium"
      }
      | Self::WithinThreeDays => {
        "text-yellow-600 font-medium"
      }
      | Self::WithinWeek => {
        "text-yellow-500 font-medium"
      }
      | Self::WithinTwoWeeks => {
        "text-blue-600 font-medium"
      }
      | Self::WithinMonth => {
        "text-blue-500 font-medium"
      }
      | Self::Distant => {
        "text-green-600"
      }
    }
  }

  pub fn card_class(
    self
  ) -> &'static str {
    match self {
      | Self::Overdue => {
        "ring-4 ring-red-400 bg-red-50"
      }
      | Self::WithinHour => {
        "ring-4 ring-red-300 bg-red-25"
      }
      | Self::WithinTwoHours => {
        "ring-3 ring-red-200 bg-red-25"
      }
      | Self::WithinSixHours => {
        "ring-2 ring-red-200 bg-red-25"
      }
      | Self::WithinTwelveHours => {
        "ring-2 ring-orange-200 bg-orange-25"
      }
      | Self::WithinDay => {
        "ring-2 ring-orange-200 bg-orange-25"
      }
      | Self::WithinTwoDays => {
        "ring-1 ring-orange-200 bg-orange-25"
      }
      | Self::WithinThreeDays => {
        "ring-1 ring-yellow-200 bg-yellow-25"
      }
      | Self::WithinWeek => {
        "ring-1 ring-yellow-200 bg-yellow-25"
      }
      | Self::WithinTwoWeeks => {
        "ring-1 ring-blue-200 bg-blue-25"
      }
      | Self::WithinMonth => {
        "ring-1 ring-blue-200 bg-blue-25"
      }
      | Self::Distant => {
        "ring-1 ring-green-200 bg-green-25"
      }
    }
  }

  pub fn ribbon(self) -> Ribbon {
    match self {
      | Self::Overdue => Ribbon {
        label: "SÜRESİ GEÇMİŞ!",
        icon:  "⚠️",
        color_class:
          "bg-red-700 text-white"
      },
      | Self::WithinHour => Ribbon {
        label: "1 SAAT KALDI!",
        icon:  "🚨",
        color_class:
          "bg-red-600 text-white"
      },
      | Self::WithinTwoHours => {
        Ribbon {
          label: "2 SAAT KALDI!",
          icon:  "🚨",
          color_class:
            "bg-red-500 text-white"
        }
      }
      | Self::WithinSixHours => {
        Ribbon {
          label: "6 SAAT KALDI!",
          icon:  "⏰",
          color_class:
            "bg-red-400 text-white"
        }
      }
      | Self::WithinTwelveHours => {
        Ribbon {
          label: "12 SAAT KALDI",
          icon:  "⏳",
          color_class:
            "bg-orange-600 text-white"
        }
      }
      | Self::WithinDay => Ribbon {
        label: "BUGÜN BİTİYOR!",
        icon:  "📅",
        color_class:
          "bg-orange-500 text-white"
      },
      | Self::WithinTwoDays => {
        Ribbon {
          label: "2 GÜN KALDI",
          icon:  "📆",
          color_class:
            "bg-orange-400 text-white"
        }
      }
      | Self::WithinThreeDays => {
        Ribbon {
          label: "3 GÜN KALDI",
          icon:  "📆",
          color_class:
            "bg-yellow-500 text-white"
        }
      }
      | Self::WithinWeek => Ribbon {
        label: "1 HAFTA KALDI",
        icon:  "📅",
        color_class:
          "bg-yellow-400 text-white"
      },
      | Self::WithinTwoWeeks => {
        Ribbon {
          label: "2 HAFTA KALDI",
          icon:  "📅",
          color_class:
            "bg-blue-500 text-white"
        }
      }
      | Self::WithinMonth => Ribbon {
        label: "1 AY KALDI",
        icon:  "📅",
        color_class:
          "bg-blue-400 text-white"
      },
      | Self::Distant => Ribbon {
        label: "UZUN SÜRE VAR",
        icon:  "✅",
        color_class:
          "bg-green-500 text-white"
      }
    }
  }
}

pub fn severity(
  due_date: Option<&str>,
  status: &Status,
  now: DateTime<Utc>
) -> Option<SeverityTier> {
  if status.is_closed() {
    return None;
  }
  let due =
    parse_timestamp_lenient(due_date)?;
  Some(SeverityTier::for_remaining(
    due - now
  ))
}

pub fn classify(
  due_date: Option<&str>,
  status: &Status,
  now: DateTime<Utc>
) -> UrgencyProjection {
  match severity(due_date, status, now)
  {
    | Some(tier) => {
      trace!(
        ?tier,
        status = status.as_str(),
        "urgency tier"
      );
      UrgencyProjection::from_tier(
        tier
      )
    }
    | None => {
      UrgencyProjection::NEUTRAL
    }
  }
}

pub fn is_overdue(
  task: &Task,
  now: DateTime<Utc>
) -> bool {
  if task.status == Status::Completed {
    return false;
  }
  parse_timestamp_lenient(
    task.due_date.as_deref()
  )
  .map(|due| due < now)
  .unwrap_or(false)
}

pub fn is_due_soon(
  task: &Task,
  now: DateTime<Utc>
) -> bool {
  if task.status == Status::Completed {
    return false;
  }
  parse_timestamp_lenient(
    task.due_date.as_deref()
  )
  .map(|due| {
    due < now + Duration::days(3)
  })
  .unwrap_or(false)
}

impl Task {
  pub fn severity(
    &self,
    now: DateTime<Utc>
  ) -> Option<SeverityTier> {
    severity(
      self.due_date.as_deref(),
      &self.status,
      now
    )
  }

  pub fn urgency(
    &self,
    now: DateTime<Utc>
  ) -> UrgencyProjection {
    classify(
      self.due_date.as_deref(),
      &self.status,
      now
    )
  }
}
