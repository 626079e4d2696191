//! Admin dashboard.
//!
//! Every panel renders seeded demo records and every action only logs what it
//! would have done; nothing here reaches the backend.

use leptos::*;
use mindspace_core::{
    filter_by_status, AlertSeverity, AlertStatus, ContentFilter, ContentItem, ContentStatus,
    ContentTemplate, CrisisAlert, MoodTrendPoint, RiskBucket,
};

use crate::components::{DistributionBar, TrendChart, TrendSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Overview,
    Analytics,
    Crisis,
    Content,
    Users,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Overview,
        AdminTab::Analytics,
        AdminTab::Crisis,
        AdminTab::Content,
        AdminTab::Users,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Analytics => "Analytics",
            AdminTab::Crisis => "Crisis Detection",
            AdminTab::Content => "Content Management",
            AdminTab::Users => "User Management",
        }
    }
}

const MOOD_TRENDS: [MoodTrendPoint; 7] = [
    MoodTrendPoint { date: "2024-01-01", happy: 65, neutral: 25, sad: 10 },
    MoodTrendPoint { date: "2024-01-02", happy: 70, neutral: 20, sad: 10 },
    MoodTrendPoint { date: "2024-01-03", happy: 60, neutral: 30, sad: 10 },
    MoodTrendPoint { date: "2024-01-04", happy: 75, neutral: 15, sad: 10 },
    MoodTrendPoint { date: "2024-01-05", happy: 68, neutral: 22, sad: 10 },
    MoodTrendPoint { date: "2024-01-06", happy: 72, neutral: 18, sad: 10 },
    MoodTrendPoint { date: "2024-01-07", happy: 78, neutral: 15, sad: 7 },
];

const RISK_BUCKETS: [RiskBucket; 3] = [
    RiskBucket { category: "Low Risk", count: 145, color: "#10b981" },
    RiskBucket { category: "Moderate Risk", count: 67, color: "#f59e0b" },
    RiskBucket { category: "High Risk", count: 23, color: "#ef4444" },
];

const CRISIS_ALERTS: [CrisisAlert; 3] = [
    CrisisAlert {
        id: 1,
        timestamp: "2024-01-07 14:30",
        severity: AlertSeverity::High,
        keywords: &["suicide", "hopeless"],
        status: AlertStatus::Active,
    },
    CrisisAlert {
        id: 2,
        timestamp: "2024-01-07 12:15",
        severity: AlertSeverity::Medium,
        keywords: &["anxiety", "panic"],
        status: AlertStatus::Resolved,
    },
    CrisisAlert {
        id: 3,
        timestamp: "2024-01-07 09:45",
        severity: AlertSeverity::High,
        keywords: &["self-harm", "worthless"],
        status: AlertStatus::Active,
    },
];

const CONTENT_LIBRARY: [ContentItem; 5] = [
    ContentItem {
        id: 1,
        title: "Understanding Depression",
        category: "Mental Health",
        status: ContentStatus::Published,
        views: 1234,
        author: "Dr. Smith",
        last_modified: "2024-01-07",
        scheduled: None,
        featured: true,
    },
    ContentItem {
        id: 2,
        title: "Anxiety Coping Strategies",
        category: "Self-Help",
        status: ContentStatus::Draft,
        views: 0,
        author: "Sarah Johnson",
        last_modified: "2024-01-06",
        scheduled: Some("2024-01-10"),
        featured: false,
    },
    ContentItem {
        id: 3,
        title: "Crisis Hotline Numbers",
        category: "Emergency",
        status: ContentStatus::Published,
        views: 2156,
        author: "Admin",
        last_modified: "2024-01-05",
        scheduled: None,
        featured: true,
    },
    ContentItem {
        id: 4,
        title: "Mindfulness Meditation Guide",
        category: "Wellness",
        status: ContentStatus::UnderReview,
        views: 0,
        author: "Dr. Chen",
        last_modified: "2024-01-04",
        scheduled: None,
        featured: false,
    },
    ContentItem {
        id: 5,
        title: "Supporting a Friend in Crisis",
        category: "Social",
        status: ContentStatus::Published,
        views: 892,
        author: "Lisa Brown",
        last_modified: "2024-01-03",
        scheduled: None,
        featured: false,
    },
];

const CONTENT_TEMPLATES: [ContentTemplate; 4] = [
    ContentTemplate {
        id: 1,
        name: "Mental Health Article",
        description: "Standard template for educational articles",
        fields: &["title", "summary", "content", "resources", "tags"],
    },
    ContentTemplate {
        id: 2,
        name: "Crisis Resource",
        description: "Template for emergency resources and hotlines",
        fields: &["title", "urgency", "contact", "description", "availability"],
    },
    ContentTemplate {
        id: 3,
        name: "Self-Help Guide",
        description: "Step-by-step guides and exercises",
        fields: &["title", "difficulty", "duration", "steps", "tips"],
    },
    ContentTemplate {
        id: 4,
        name: "Community Guidelines",
        description: "Rules and guidelines for community spaces",
        fields: &["title", "rules", "consequences", "examples"],
    },
];

const CONTENT_FILTERS: [ContentFilter; 4] = [
    ContentFilter::All,
    ContentFilter::Status(ContentStatus::Published),
    ContentFilter::Status(ContentStatus::Draft),
    ContentFilter::Status(ContentStatus::UnderReview),
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (tab, set_tab) = create_signal(AdminTab::Overview);

    view! {
        <div class="admin">
            <header class="admin-header">
                <h1>"MindSpace Admin Dashboard"</h1>
                <p>
                    "Monitor user engagement, track mental health trends, and manage \
                     crisis interventions"
                </p>
            </header>

            <nav class="tab-nav">
                {AdminTab::ALL
                    .iter()
                    .map(|&t| {
                        view! {
                            <button
                                class:active=move || tab.get() == t
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="tab-body">
                <div class:hidden=move || tab.get() != AdminTab::Overview>
                    <OverviewPanel/>
                </div>
                <div class:hidden=move || tab.get() != AdminTab::Analytics>
                    <AnalyticsPanel/>
                </div>
                <div class:hidden=move || tab.get() != AdminTab::Crisis>
                    <CrisisPanel/>
                </div>
                <div class:hidden=move || tab.get() != AdminTab::Content>
                    <ContentPanel/>
                </div>
                <div class:hidden=move || tab.get() != AdminTab::Users>
                    <UsersPanel/>
                </div>
            </main>
        </div>
    }
}

#[component]
fn OverviewPanel() -> impl IntoView {
    let activity = [
        ("New user completed anxiety assessment", "2 minutes ago"),
        ("Crisis keyword detected in chat", "15 minutes ago"),
        (
            "Resource \"Coping with Stress\" viewed 50 times",
            "1 hour ago",
        ),
    ];

    view! {
        <div class="stat-grid">
            <div class="card stat-card">
                <h4>"Total Users"</h4>
                <div class="stat-value">"2,847"</div>
                <p>"+12% from last month"</p>
            </div>
            <div class="card stat-card">
                <h4>"Mood Check-ins"</h4>
                <div class="stat-value">"1,234"</div>
                <p>"This week"</p>
            </div>
            <div class="card stat-card">
                <h4>"Assessments"</h4>
                <div class="stat-value">"567"</div>
                <p>"Completed this month"</p>
            </div>
            <div class="card stat-card alert">
                <h4>"Crisis Alerts"</h4>
                <div class="stat-value">"3"</div>
                <p>"Active alerts"</p>
            </div>
        </div>

        <div class="card">
            <h3>"Recent Activity"</h3>
            <p class="card-subtitle">"Latest user interactions and system events"</p>
            <ul class="activity-feed">
                {activity
                    .iter()
                    .map(|&(event, when)| {
                        view! {
                            <li>
                                <p>{event}</p>
                                <span class="activity-when">{when}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn AnalyticsPanel() -> impl IntoView {
    let series = vec![
        TrendSeries {
            name: "Happy",
            color: "#10b981",
            values: MOOD_TRENDS.iter().map(|p| p.happy as f64).collect(),
        },
        TrendSeries {
            name: "Neutral",
            color: "#f59e0b",
            values: MOOD_TRENDS.iter().map(|p| p.neutral as f64).collect(),
        },
        TrendSeries {
            name: "Sad",
            color: "#ef4444",
            values: MOOD_TRENDS.iter().map(|p| p.sad as f64).collect(),
        },
    ];
    let total_assessed: u32 = RISK_BUCKETS.iter().map(|b| b.count).sum();

    view! {
        <div class="dashboard-row">
            <div class="card">
                <h3>"Mood Trends"</h3>
                <p class="card-subtitle">"Weekly mood check-in patterns"</p>
                <TrendChart series=series max=100.0/>
            </div>
            <div class="card">
                <h3>"Risk Assessment Distribution"</h3>
                <p class="card-subtitle">"Current user risk levels"</p>
                {RISK_BUCKETS
                    .iter()
                    .map(|bucket| {
                        view! {
                            <DistributionBar
                                label=bucket.category
                                count=bucket.count
                                total=total_assessed
                                color=bucket.color
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CrisisPanel() -> impl IntoView {
    view! {
        <div class="card crisis-card">
            <h3>"Crisis Alerts"</h3>
            <p class="card-subtitle">"Real-time monitoring of crisis indicators"</p>
            <ul class="alert-list">
                {CRISIS_ALERTS
                    .iter()
                    .map(|alert| {
                        let id = alert.id;
                        view! {
                            <li class="alert-row">
                                <div>
                                    <span class=match alert.severity {
                                        AlertSeverity::High => "badge severity high",
                                        _ => "badge severity",
                                    }>
                                        {format!("{} Risk", alert.severity.label())}
                                    </span>
                                    <span class="badge">{alert.status.label()}</span>
                                    <p>
                                        {format!(
                                            "Keywords detected: {}",
                                            alert.keywords.join(", "),
                                        )}
                                    </p>
                                    <span class="alert-time">{alert.timestamp}</span>
                                </div>
                                <div class="alert-actions">
                                    <button on:click=move |_| {
                                        tracing::info!(alert = id, "reviewing crisis alert")
                                    }>
                                        "Review"
                                    </button>
                                    <button on:click=move |_| {
                                        tracing::info!(alert = id, "contacting user for alert")
                                    }>
                                        "Contact"
                                    </button>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ContentPanel() -> impl IntoView {
    let filter = create_rw_signal(ContentFilter::default());
    let filtered = move || filter_by_status(&CONTENT_LIBRARY, filter.get());

    view! {
        <div class="stat-grid">
            <div class="card stat-card">
                <div class="stat-value">"24"</div>
                <p>"Total Articles"</p>
            </div>
            <div class="card stat-card">
                <div class="stat-value">"3"</div>
                <p>"Pending Review"</p>
            </div>
            <div class="card stat-card">
                <div class="stat-value">"2"</div>
                <p>"Scheduled"</p>
            </div>
            <div class="card stat-card">
                <div class="stat-value">"19"</div>
                <p>"Published"</p>
            </div>
        </div>

        <div class="content-columns">
            <div class="card content-library">
                <div class="library-header">
                    <div>
                        <h3>"Content Library"</h3>
                        <p class="card-subtitle">
                            "Manage all mental health resources and content"
                        </p>
                    </div>
                    <div class="filter-buttons">
                        {CONTENT_FILTERS
                            .iter()
                            .map(|&f| {
                                view! {
                                    <button
                                        class:active=move || filter.get() == f
                                        on:click=move |_| filter.set(f)
                                    >
                                        {f.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <ul class="content-list">
                    {move || {
                        filtered()
                            .into_iter()
                            .map(|item| view! { <ContentRow item=item/> })
                            .collect_view()
                    }}
                </ul>
            </div>

            <div class="content-sidebar">
                <CreateContentForm/>
                <div class="card">
                    <h3>"Content Templates"</h3>
                    <p class="card-subtitle">
                        "Pre-built templates for different content types"
                    </p>
                    {CONTENT_TEMPLATES
                        .iter()
                        .map(|template| {
                            view! {
                                <div class="template-card">
                                    <h4>{template.name}</h4>
                                    <p>{template.description}</p>
                                    <div class="template-fields">
                                        {template
                                            .fields
                                            .iter()
                                            .map(|&field| {
                                                view! { <span class="badge">{field}</span> }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ContentRow(item: ContentItem) -> impl IntoView {
    let id = item.id;
    view! {
        <li class="content-row">
            <div>
                <h4>
                    {item.title}
                    <Show when=move || item.featured>
                        <span class="badge">"Featured"</span>
                    </Show>
                </h4>
                <div class="content-badges">
                    <span class="badge">{item.category}</span>
                    <span class="badge">{item.status.label()}</span>
                    {item
                        .scheduled
                        .map(|date| {
                            view! {
                                <span class="badge">{format!("Scheduled: {date}")}</span>
                            }
                        })}
                </div>
                <div class="content-meta">
                    <span>{format!("By {}", item.author)}</span>
                    <span>{format!("Modified: {}", item.last_modified)}</span>
                    <span>{format!("{} views", item.views)}</span>
                </div>
            </div>
            <div class="content-actions">
                <Show when=move || item.status == ContentStatus::UnderReview>
                    <button on:click=move |_| {
                        tracing::info!(content = id, "approving content")
                    }>
                        "Approve"
                    </button>
                    <button on:click=move |_| {
                        tracing::info!(content = id, "rejecting content")
                    }>
                        "Reject"
                    </button>
                </Show>
                <button on:click=move |_| tracing::info!(content = id, "viewing content")>
                    "View"
                </button>
                <button on:click=move |_| tracing::info!(content = id, "editing content")>
                    "Edit"
                </button>
                <button on:click=move |_| tracing::info!(content = id, "deleting content")>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
fn CreateContentForm() -> impl IntoView {
    let (title, set_title) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());
    let (tags, set_tags) = create_signal(String::new());
    let (body, set_body) = create_signal(String::new());
    let (featured, set_featured) = create_signal(false);
    let (scheduled, set_scheduled) = create_signal(String::new());

    let log_submit = move |action: &'static str| {
        tracing::info!(
            action,
            title = %title.get_untracked(),
            category = %category.get_untracked(),
            tags = %tags.get_untracked(),
            featured = featured.get_untracked(),
            scheduled = %scheduled.get_untracked(),
            "content form submitted"
        );
    };

    view! {
        <div class="card">
            <h3>"Create New Content"</h3>
            <p class="card-subtitle">"Add new mental health resources"</p>
            <label>
                "Title"
                <input
                    type="text"
                    placeholder="Content title"
                    prop:value=title
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Category"
                <input
                    type="text"
                    placeholder="Select category"
                    prop:value=category
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Tags"
                <input
                    type="text"
                    placeholder="anxiety, depression, coping"
                    prop:value=tags
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Content"
                <textarea
                    placeholder="Write your content here..."
                    prop:value=body
                    on:input=move |ev| set_body.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    prop:checked=featured
                    on:change=move |ev| set_featured.set(event_target_checked(&ev))
                />
                "Featured content"
            </label>
            <label>
                "Schedule Publication"
                <input
                    type="datetime-local"
                    prop:value=scheduled
                    on:input=move |ev| set_scheduled.set(event_target_value(&ev))
                />
            </label>
            <div class="form-actions">
                <button class="primary" on:click=move |_| log_submit("publish")>
                    "Publish Now"
                </button>
                <button on:click=move |_| log_submit("save-draft")>"Save Draft"</button>
            </div>
        </div>
    }
}

#[component]
fn UsersPanel() -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Privacy-Protected User Overview"</h3>
            <p class="card-subtitle">
                "Anonymized user engagement metrics (no personal data)"
            </p>
            <div class="stat-grid">
                <div class="stat-tile">
                    <div class="stat-value">"2,847"</div>
                    <p>"Total Anonymous Users"</p>
                </div>
                <div class="stat-tile">
                    <div class="stat-value">"1,234"</div>
                    <p>"Active This Week"</p>
                </div>
                <div class="stat-tile">
                    <div class="stat-value">"89%"</div>
                    <p>"Engagement Rate"</p>
                </div>
            </div>
            <div class="privacy-note">
                <h4>"Privacy Protection"</h4>
                <p>
                    "All user data is anonymized and aggregated. No personal information \
                     is displayed or stored in identifiable formats. Crisis detection \
                     alerts are handled through secure, encrypted channels with immediate \
                     professional intervention protocols."
                </p>
            </div>
        </div>
    }
}
