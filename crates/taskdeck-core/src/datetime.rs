use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{
  Context,
  anyhow
};
use chrono::{
  DateTime,
  Datelike,
  LocalResult,
  NaiveDate,
  NaiveDateTime,
  TimeZone,
  Timelike,
  Utc
};
use chrono_tz::Tz;
use regex::Regex;
use serde::Deserialize;
use tracing::trace;

const TIMEZONE_CONFIG_FILE: &str =
  "taskdeck-time.toml";
const TIMEZONE_ENV_VAR: &str =
  "TASKDECK_TIMEZONE";
const TIMEZONE_CONFIG_ENV_VAR: &str =
  "TASKDECK_TIME_CONFIG";
const DEFAULT_PROJECT_TIMEZONE: &str =
  "Europe/Istanbul";

pub const MISSING_DATE_LABEL: &str =
  "Tarih belirtilmemiş";
pub const INVALID_DATE_LABEL: &str =
  "Geçersiz tarih";

const TURKISH_MONTHS: [&str; 12] = [
  "Ocak", "Şubat", "Mart", "Nisan",
  "Mayıs", "Haziran", "Temmuz",
  "Ağustos", "Eylül", "Ekim", "Kasım",
  "Aralık"
];

#[derive(Debug, Deserialize)]
struct TimezoneConfig {
  timezone: Option<String>,
  time:     Option<TimezoneSection>
}

#[derive(Debug, Deserialize)]
struct TimezoneSection {
  timezone: Option<String>
}

pub fn project_timezone() -> &'static Tz
{
  static PROJECT_TZ: OnceLock<Tz> =
    OnceLock::new();
  PROJECT_TZ.get_or_init(
    resolve_project_timezone
  )
}

fn resolve_project_timezone() -> Tz {
  if let Ok(raw) =
    std::env::var(TIMEZONE_ENV_VAR)
    && let Some(tz) = parse_timezone(
      &raw,
      TIMEZONE_ENV_VAR
    )
  {
    return tz;
  }

  for path in timezone_config_paths() {
    if let Some(tz) =
      load_timezone_from_file(&path)
    {
      return tz;
    }
  }

  parse_timezone(
    DEFAULT_PROJECT_TIMEZONE,
    "DEFAULT_PROJECT_TIMEZONE"
  )
  .unwrap_or_else(|| {
    tracing::error!(
      "failed to parse fallback \
       timezone; using UTC"
    );
    chrono_tz::UTC
  })
}

fn timezone_config_paths()
-> Vec<PathBuf> {
  if let Ok(raw) = std::env::var(
    TIMEZONE_CONFIG_ENV_VAR
  ) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
      return vec![PathBuf::from(
        trimmed
      )];
    }
  }

  let mut paths = Vec::new();
  if let Ok(dir) =
    std::env::current_dir()
  {
    paths.push(
      dir.join(TIMEZONE_CONFIG_FILE)
    );
  }
  if let Some(dir) = dirs::config_dir()
  {
    paths.push(
      dir
        .join("taskdeck")
        .join(TIMEZONE_CONFIG_FILE)
    );
  }
  paths
}

fn load_timezone_from_file(
  path: &PathBuf
) -> Option<Tz> {
  if !path.exists() {
    tracing::info!(
      file = %path.display(),
      "timezone config file not found"
    );
    return None;
  }

  let raw = match fs::read_to_string(
    path
  ) {
    | Ok(raw) => raw,
    | Err(err) => {
      tracing::error!(
        file = %path.display(),
        error = %err,
        "failed reading timezone config file"
      );
      return None;
    }
  };

  let parsed = match toml::from_str::<
    TimezoneConfig
  >(&raw)
  {
    | Ok(parsed) => parsed,
    | Err(err) => {
      tracing::error!(
        file = %path.display(),
        error = %err,
        "failed parsing timezone config file"
      );
      return None;
    }
  };

  let timezone =
    parsed.timezone.or_else(|| {
      parsed.time.and_then(|section| {
        section.timezone
      })
    });
  let Some(timezone) = timezone else {
    tracing::warn!(
      file = %path.display(),
      "timezone config had no timezone field"
    );
    return None;
  };

  parse_timezone(
    timezone.as_str(),
    &format!("file:{}", path.display())
  )
}

fn parse_timezone(
  raw: &str,
  source: &str
) -> Option<Tz> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    tracing::warn!(
      source,
      "timezone source was empty"
    );
    return None;
  }

  match trimmed.parse::<Tz>() {
    | Ok(tz) => {
      tracing::info!(
        source,
        timezone = %trimmed,
        "configured project timezone"
      );
      Some(tz)
    }
    | Err(err) => {
      tracing::error!(
        source,
        timezone = %trimmed,
        error = %err,
        "failed to parse timezone id"
      );
      None
    }
  }
}

fn to_utc_from_project_local(
  local_naive: NaiveDateTime,
  context: &str
) -> anyhow::Result<DateTime<Utc>> {
  match project_timezone()
    .from_local_datetime(&local_naive)
  {
    | LocalResult::Single(local_dt) => {
      Ok(local_dt.with_timezone(&Utc))
    }
    | LocalResult::Ambiguous(
      first,
      second
    ) => {
      tracing::warn!(
        context,
        first = %first,
        second = %second,
        "ambiguous local datetime; using earliest"
      );
      let chosen = if first <= second {
        first
      } else {
        second
      };
      Ok(chosen.with_timezone(&Utc))
    }
    | LocalResult::None => {
      Err(anyhow!(
        "local datetime does not \
         exist in configured \
         timezone: {context}"
      ))
    }
  }
}

#[tracing::instrument]
pub fn parse_timestamp(
  input: &str
) -> anyhow::Result<DateTime<Utc>> {
  let token = input.trim();
  if token.is_empty() {
    return Err(anyhow!(
      "empty timestamp"
    ));
  }

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(token)
  {
    return Ok(dt.with_timezone(&Utc));
  }

  let naive_re = Regex::new(
    r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}(:\d{2})?$"
  )
  .map_err(|e| {
    anyhow!(
      "internal regex compile \
       failure: {e}"
    )
  })?;
  if naive_re.is_match(token) {
    for fmt in [
      "%Y-%m-%dT%H:%M:%S",
      "%Y-%m-%dT%H:%M",
      "%Y-%m-%d %H:%M:%S",
      "%Y-%m-%d %H:%M"
    ] {
      if let Ok(ndt) =
        NaiveDateTime::parse_from_str(
          token, fmt
        )
      {
        return to_utc_from_project_local(
          ndt, fmt
        );
      }
    }
  }

  if let Ok(date) =
    NaiveDate::parse_from_str(
      token, "%Y-%m-%d"
    )
  {
    let midnight = date
      .and_hms_opt(0, 0, 0)
      .ok_or_else(|| {
        anyhow!(
          "failed to construct \
           midnight for date"
        )
      })?;
    return to_utc_from_project_local(
      midnight, "date"
    );
  }

  Err(anyhow!(
    "unrecognized timestamp: {input}"
  ))
  .with_context(|| {
    "supported formats: RFC 3339, \
     YYYY-MM-DDTHH:MM[:SS], \
     YYYY-MM-DD HH:MM[:SS], \
     YYYY-MM-DD"
  })
}

pub fn parse_timestamp_lenient(
  input: Option<&str>
) -> Option<DateTime<Utc>> {
  let raw = input?.trim();
  if raw.is_empty() {
    return None;
  }

  match parse_timestamp(raw) {
    | Ok(dt) => Some(dt),
    | Err(err) => {
      trace!(
        input = raw,
        error = %err,
        "unparseable timestamp treated as absent"
      );
      None
    }
  }
}

#[must_use]
pub fn format_datetime(
  raw: Option<&str>
) -> String {
  format_with(raw, |local| {
    format!(
      "{:02} {} {}, {:02}:{:02}",
      local.day(),
      TURKISH_MONTHS
        [local.month0() as usize],
      local.year(),
      local.hour(),
      local.minute()
    )
  })
}

#[must_use]
pub fn format_date(
  raw: Option<&str>
) -> String {
  format_with(raw, |local| {
    format!(
      "{:02} {} {}",
      local.day(),
      TURKISH_MONTHS
        [local.month0() as usize],
      local.year()
    )
  })
}

fn format_with(
  raw: Option<&str>,
  render: impl Fn(DateTime<Tz>) -> String
) -> String {
  let Some(token) = raw
    .map(str::trim)
    .filter(|t| !t.is_empty())
  else {
    return MISSING_DATE_LABEL
      .to_string();
  };

  match parse_timestamp(token) {
    | Ok(dt) => render(
      dt.with_timezone(
        project_timezone()
      )
    ),
    | Err(err) => {
      trace!(
        input = token,
        error = %err,
        "formatting unparseable timestamp"
      );
      INVALID_DATE_LABEL.to_string()
    }
  }
}
