use std::cmp::Ordering;

use chrono::{
  DateTime,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

use crate::datetime::parse_timestamp_lenient;
use crate::task::{
  Category,
  Priority,
  Status,
  Task
};

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct TaskQuery {
  pub search:   Option<String>,
  pub status:   Option<Status>,
  pub priority: Option<Priority>,
  pub category: Option<Category>
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
  Title,
  DueDate,
  Priority,
  #[default]
  CreatedAt
}

impl SortKey {
  pub fn parse(
    token: &str
  ) -> Option<Self> {
    match token
      .to_ascii_lowercase()
      .as_str()
    {
      | "title" => Some(Self::Title),
      | "due_date" | "due" => {
        Some(Self::DueDate)
      }
      | "priority" | "pri" => {
        Some(Self::Priority)
      }
      | "created_at" | "created" => {
        Some(Self::CreatedAt)
      }
      | _ => None
    }
  }

  pub fn parse_or_default(
    token: &str
  ) -> Self {
    Self::parse(token)
      .unwrap_or_default()
  }
}

#[tracing::instrument(skip(
  tasks, query
))]
pub fn filter_and_sort(
  tasks: &[Task],
  query: &TaskQuery,
  sort: SortKey
) -> Vec<Task> {
  let mut view: Vec<Task> = tasks
    .iter()
    .filter(|task| {
      matches_query(task, query)
    })
    .cloned()
    .collect();

  view.sort_by(|a, b| {
    compare_tasks(a, b, sort)
  });

  trace!(
    input = tasks.len(),
    output = view.len(),
    "list view built"
  );
  view
}

fn matches_query(
  task: &Task,
  query: &TaskQuery
) -> bool {
  let ok = matches_search(
    task,
    query.search.as_deref()
  ) && query
    .status
    .as_ref()
    .is_none_or(|s| task.status == *s)
    && query
      .priority
      .as_ref()
      .is_none_or(|p| {
        task.priority == *p
      })
    && query
      .category
      .as_ref()
      .is_none_or(|c| {
        task.category == *c
      });

  trace!(
    id = task.id,
    ok,
    "task query evaluation"
  );
  ok
}

fn matches_search(
  task: &Task,
  search: Option<&str>
) -> bool {
  let Some(raw) = search else {
    return true;
  };
  let needle =
    raw.trim().to_lowercase();
  if needle.is_empty() {
    return true;
  }

  task
    .title
    .to_lowercase()
    .contains(&needle)
    || task
      .description
      .as_deref()
      .is_some_and(|desc| {
        desc
          .to_lowercase()
          .contains(&needle)
      })
}

fn compare_tasks(
  a: &Task,
  b: &Task,
  sort: SortKey
) -> Ordering {
  match sort {
    | SortKey::Title => {
      a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
    }
    | SortKey::DueDate => {
      cmp_optional(
        parse_timestamp_lenient(
          a.due_date.as_deref()
        )
        .as_ref(),
        parse_timestamp_lenient(
          b.due_date.as_deref()
        )
        .as_ref()
      )
    }
    | SortKey::Priority => {
      b.priority
        .rank()
        .cmp(&a.priority.rank())
    }
    | SortKey::CreatedAt => {
      cmp_optional_desc(
        created_key(a).as_ref(),
        created_key(b).as_ref()
      )
    }
  }
}

fn created_key(
  task: &Task
) -> Option<DateTime<Utc>> {
  parse_timestamp_lenient(Some(
    task.created_at.as_str()
  ))
}

fn cmp_optional<T: Ord>(
  left: Option<&T>,
  right: Option<&T>
) -> Ordering {
  match (left, right) {
    | (Some(a), Some(b)) => a.cmp(b),
    | (Some(_), None) => Ordering::Less,
    | (None, Some(_)) => {
      Ordering::Greater
    }
    | (None, None) => Ordering::Equal
  }
}

fn cmp_optional_desc<T: Ord>(
  left: Option<&T>,
  right: Option<&T>
) -> Ordering {
  match (left, right) {
    | (Some(a), Some(b)) => b.cmp(a),
    | (Some(_), None) => Ordering::Less,
    | (None, Some(_)) => {
      Ordering::Greater
    }
    | (None, None) => Ordering::Equal
  }
}
