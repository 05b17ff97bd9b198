use chrono::{DateTime, Duration, TimeZone, Utc};
use taskdeck_core::task::{Category, Priority, Status, Task};
use taskdeck_core::urgency::{SeverityTier, UrgencyProjection};
use taskdeck_core::view::{SortKey, TaskQuery, filter_and_sort};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 16, 5, 0, 0).unwrap()
}

#[test]
fn render_pass_over_a_wire_payload() {
    init_tracing();
    let now = fixed_now();

    let payload = serde_json::json!([
        {
            "id": 1,
            "title": "Sunum hazırla",
            "description": "Pazartesi toplantısı için",
            "category": "work",
            "priority": "high",
            "status": "pending",
            "due_date": (now + Duration::minutes(30)).to_rfc3339(),
            "created_at": (now - Duration::days(1)).to_rfc3339()
        },
        {
            "id": 2,
            "title": "Tatil planı",
            "category": "travel",
            "priority": "low",
            "status": "pending",
            "due_date": (now + Duration::days(10)).to_rfc3339(),
            "created_at": (now - Duration::days(2)).to_rfc3339()
        },
        {
            "id": 3,
            "title": "Spor salonu üyeliği",
            "category": "health",
            "priority": "medium",
            "status": "completed",
            "due_date": (now - Duration::days(1)).to_rfc3339(),
            "created_at": (now - Duration::days(3)).to_rfc3339()
        },
        {
            "id": 4,
            "title": "Eski görev",
            "category": "hobbies",
            "priority": "critical",
            "status": "archived",
            "due_date": "not-a-timestamp",
            "created_at": (now - Duration::days(4)).to_rfc3339()
        }
    ]);

    let tasks: Vec<Task> = serde_json::from_value(payload).expect("deserialize payload");
    assert_eq!(tasks.len(), 4);

    let imminent = tasks[0].urgency(now);
    assert_eq!(imminent.text_class, "text-red-600 font-bold");
    assert!(imminent.show_ribbon);
    assert_eq!(imminent.ribbon.expect("ribbon").label, "1 SAAT KALDI!");
    assert_eq!(tasks[0].severity(now), Some(SeverityTier::WithinHour));

    let far_out = tasks[1].urgency(now);
    assert_eq!(tasks[1].severity(now), Some(SeverityTier::WithinTwoWeeks));
    assert!(!far_out.show_ribbon);
    assert_eq!(far_out.text_class, "text-blue-600 font-medium");

    assert_eq!(tasks[2].urgency(now), UrgencyProjection::NEUTRAL);
    assert_eq!(tasks[3].urgency(now), UrgencyProjection::NEUTRAL);
    assert_eq!(tasks[3].status, Status::Unknown("archived".to_string()));
    assert_eq!(tasks[3].status.display_name(), "archived");
    assert_eq!(tasks[3].category.display_name(), "hobbies");

    assert_eq!(tasks[0].category, Category::Work);
    assert_eq!(tasks[0].category.icon(), "💼");
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].priority.display_name(), "Yüksek");
}

#[test]
fn list_view_pipeline() {
    init_tracing();
    let now = fixed_now();

    let mut tasks = Vec::new();
    for (id, title, offset_days) in
        [(1, "Bütçe tablosu", 3), (2, "bütçe sunumu", 2), (3, "Rapor", 1)]
    {
        let mut task = Task::new(id, title, now - Duration::days(offset_days));
        task.category = Category::Finance;
        tasks.push(task);
    }
    tasks[2].status = Status::InProgress;

    let query = TaskQuery {
        search: Some("BÜTÇE".to_string()),
        ..TaskQuery::default()
    };
    let view = filter_and_sort(&tasks, &query, SortKey::parse_or_default("created_at"));
    let ids: Vec<u64> = view.iter().map(|t| t.id).collect();
    assert_eq!(ids, [2, 1]);

    let again = filter_and_sort(&view, &query, SortKey::CreatedAt);
    assert_eq!(view, again);
}
