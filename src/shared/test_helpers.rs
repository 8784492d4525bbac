use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::events::models::{Event, EventDetail};
use crate::features::events::repositories::EventRepository;
use crate::features::local_govs::models::LocalGov;
use crate::shared::types::{Page, PageRequest};

/// In-memory stand-in for the PostgreSQL repositories
pub struct InMemoryStore {
    local_govs: Vec<LocalGov>,
    categories: Vec<Category>,
    events: Vec<Event>,
}

impl InMemoryStore {
    fn newest_first<'a>(&self, events: impl Iterator<Item = &'a Event>) -> Vec<Event> {
        let mut sorted: Vec<Event> = events.cloned().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        sorted
    }

    fn paginate(events: Vec<Event>, request: PageRequest) -> Page<Event> {
        let total = events.len() as i64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.limit()).unwrap_or(0);
        let items = events.into_iter().skip(offset).take(limit).collect();
        Page::new(items, total, request)
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Event>> {
        Ok(Self::paginate(self.newest_first(self.events.iter()), request))
    }

    async fn find_by_title_containing(
        &self,
        keyword: &str,
        request: PageRequest,
    ) -> Result<Page<Event>> {
        let matching = self.newest_first(self.events.iter().filter(|e| e.title.contains(keyword)));
        Ok(Self::paginate(matching, request))
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
        request: PageRequest,
    ) -> Result<Page<Event>> {
        let matching =
            self.newest_first(self.events.iter().filter(|e| e.category_id == category_id));
        Ok(Self::paginate(matching, request))
    }

    async fn find_detail_by_id(&self, id: i64) -> Result<Option<EventDetail>> {
        let Some(event) = self.events.iter().find(|e| e.id == id) else {
            return Ok(None);
        };
        let local_gov = self
            .local_govs
            .iter()
            .find(|l| l.id == event.local_gov_id)
            .cloned()
            .ok_or_else(|| AppError::Internal("dangling local_gov_id".to_string()))?;
        let category = self
            .categories
            .iter()
            .find(|c| c.id == event.category_id)
            .cloned()
            .ok_or_else(|| AppError::Internal("dangling category_id".to_string()))?;

        Ok(Some(EventDetail {
            event: event.clone(),
            local_gov,
            category,
        }))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.categories.iter().any(|c| c.id == id))
    }
}

/// Repository whose every call fails like an unreachable database
pub struct FailingStore;

fn unreachable_database() -> AppError {
    AppError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl EventRepository for FailingStore {
    async fn find_all(&self, _request: PageRequest) -> Result<Page<Event>> {
        Err(unreachable_database())
    }

    async fn find_by_title_containing(
        &self,
        _keyword: &str,
        _request: PageRequest,
    ) -> Result<Page<Event>> {
        Err(unreachable_database())
    }

    async fn find_by_category_id(
        &self,
        _category_id: i64,
        _request: PageRequest,
    ) -> Result<Page<Event>> {
        Err(unreachable_database())
    }

    async fn find_detail_by_id(&self, _id: i64) -> Result<Option<EventDetail>> {
        Err(unreachable_database())
    }
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn find_all(&self) -> Result<Vec<Category>> {
        Err(unreachable_database())
    }

    async fn exists_by_id(&self, _id: i64) -> Result<bool> {
        Err(unreachable_database())
    }
}

/// Rows seeded by `seeded_store`
pub struct Fixture {
    /// Category of the two Seoul events
    pub festival: Category,
    /// Category of the Jinju event
    pub lantern: Category,
    /// Category without events
    pub exhibition: Category,
    pub seoul: LocalGov,
    pub gyeongnam: LocalGov,
    /// Oldest event
    pub gourmet: EventDetail,
    pub jinju_lantern: EventDetail,
    /// Newest event
    pub fireworks: EventDetail,
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0).unwrap()
}

fn event(id: i64, local_gov: &LocalGov, category: &Category, title: &str) -> Event {
    Event {
        id,
        local_gov_id: local_gov.id,
        category_id: category.id,
        title: title.to_string(),
        address: None,
        start_date: None,
        end_date: None,
        start_time: None,
        end_time: None,
        url: None,
        spot: None,
        fee: None,
        host: None,
        inquiry: None,
        description: None,
        created_at: base_time() + Duration::minutes(id),
    }
}

fn detail(event: Event, local_gov: &LocalGov, category: &Category) -> EventDetail {
    EventDetail {
        event,
        local_gov: local_gov.clone(),
        category: category.clone(),
    }
}

/// Three events in two categories across two local governments
pub fn seeded_store() -> (Arc<InMemoryStore>, Fixture) {
    let festival = Category {
        id: 1,
        name: "축제".to_string(),
    };
    let lantern = Category {
        id: 2,
        name: "문화관광".to_string(),
    };
    let exhibition = Category {
        id: 3,
        name: "전시".to_string(),
    };
    let seoul = LocalGov {
        id: 1,
        district: "서울특별시".to_string(),
        name: None,
        phone: None,
        email: None,
    };
    let gyeongnam = LocalGov {
        id: 2,
        district: "경상남도".to_string(),
        name: Some("진주시".to_string()),
        phone: Some("055-111-1111".to_string()),
        email: Some("jinju@jinju.com".to_string()),
    };

    let gourmet = event(1, &seoul, &festival, "고메 잇 강남 서울야장");

    let mut jinju = event(2, &gyeongnam, &lantern, "진주유등축제");
    jinju.address = Some("경상남도 진주시".to_string());
    jinju.start_date = NaiveDate::from_ymd_opt(2025, 10, 1);
    jinju.end_date = NaiveDate::from_ymd_opt(2025, 10, 13);
    jinju.start_time = NaiveTime::from_hms_opt(10, 0, 0);
    jinju.end_time = NaiveTime::from_hms_opt(23, 0, 0);
    jinju.url = Some("https://example2.com".to_string());
    jinju.spot = Some("남강둔치".to_string());
    jinju.host = Some("진주시청".to_string());
    jinju.inquiry = Some("관리자".to_string());
    jinju.description = Some("진주의 대표 축제".to_string());

    let fireworks = event(3, &seoul, &festival, "서울 불꽃축제");

    let store = InMemoryStore {
        local_govs: vec![seoul.clone(), gyeongnam.clone()],
        categories: vec![festival.clone(), lantern.clone(), exhibition.clone()],
        events: vec![gourmet.clone(), jinju.clone(), fireworks.clone()],
    };

    let fixture = Fixture {
        gourmet: detail(gourmet, &seoul, &festival),
        jinju_lantern: detail(jinju, &gyeongnam, &lantern),
        fireworks: detail(fireworks, &seoul, &festival),
        festival,
        lantern,
        exhibition,
        seoul,
        gyeongnam,
    };

    (Arc::new(store), fixture)
}

/// `count` events with random titles; some share a creation timestamp
pub fn store_with_random_events(count: i64) -> (Arc<InMemoryStore>, Vec<Event>) {
    let category = Category {
        id: 1,
        name: "축제".to_string(),
    };
    let local_gov = LocalGov {
        id: 1,
        district: "서울특별시".to_string(),
        name: None,
        phone: None,
        email: None,
    };

    let events: Vec<Event> = (1..=count)
        .map(|id| {
            let title: String = Sentence(2..5).fake();
            let mut e = event(id, &local_gov, &category, &title);
            // Pairs of events share a timestamp so the id tie-break is exercised
            e.created_at = base_time() + Duration::minutes(id / 2);
            e
        })
        .collect();

    let store = InMemoryStore {
        local_govs: vec![local_gov],
        categories: vec![category],
        events: events.clone(),
    };

    (Arc::new(store), events)
}
