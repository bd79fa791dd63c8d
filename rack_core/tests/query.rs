mod common;

use common::{rack, racks};
use rack_core::query::{ALL_DISTRICTS, district_facets, filter};
use rack_core::{BrowseState, DistrictFilter, PAGE_SIZE, RackId, RackQuery, RackStore};

#[test]
fn hundred_twenty_racks_make_three_pages() {
    let store = RackStore::from_racks(racks(120, &["연수구"]));
    let query = RackQuery::default();

    let sizes: Vec<usize> = (1..=3).map(|p| store.query(&query, p).items.len()).collect();
    assert_eq!(sizes, vec![50, 50, 20]);
    assert_eq!(store.query(&query, 1).pagination.page_count, 3);
    assert_eq!(store.query(&query, 1).pagination.total, 120);
}

#[test]
fn pages_concatenate_to_the_filtered_sequence() {
    let store = RackStore::from_racks(racks(237, &["서구", "중구", "동구"]));
    let query = RackQuery::new("", DistrictFilter::parse("중구"));

    let expected: Vec<RackId> = filter(store.registry().racks(), &query)
        .iter()
        .map(|r| r.id.clone())
        .collect();
    let first = store.query(&query, 1);
    assert_eq!(first.pagination.page_count, expected.len().div_ceil(PAGE_SIZE));

    let paged: Vec<RackId> = (1..=first.pagination.page_count)
        .flat_map(|p| store.query(&query, p).items.into_iter().map(|item| item.rack.id.clone()))
        .collect();
    assert_eq!(paged, expected);
}

#[test]
fn empty_text_and_sentinel_return_everything() {
    let mut all = racks(5, &["서구", "중구"]);
    all.push(rack(6, "무명", ""));
    let store = RackStore::from_racks(all);

    let page = store.query(&RackQuery::new("", DistrictFilter::All), 1);
    let ids: Vec<RackId> = page.items.iter().map(|item| item.rack.id.clone()).collect();
    assert_eq!(ids, (1..=6).map(RackId::Feed).collect::<Vec<_>>());
}

#[test]
fn text_matches_name_or_district_substrings() {
    let store = RackStore::from_racks(vec![
        rack(1, "인천대입구역", "연수구"),
        rack(2, "부평역 광장", "부평구"),
        rack(3, "송도 센트럴파크", "연수구"),
        rack(4, "Station", "서구"),
    ]);

    let ids = |text: &str| -> Vec<RackId> {
        store
            .query(&RackQuery::new(text, DistrictFilter::All), 1)
            .items
            .iter()
            .map(|item| item.rack.id.clone())
            .collect()
    };

    assert_eq!(ids("역"), vec![RackId::Feed(1), RackId::Feed(2)]);
    assert_eq!(ids("연수"), vec![RackId::Feed(1), RackId::Feed(3)]);
    assert_eq!(ids("station"), Vec::<RackId>::new());
    assert_eq!(ids("Station"), vec![RackId::Feed(4)]);
}

#[test]
fn district_filter_combines_with_text() {
    let store = RackStore::from_racks(vec![
        rack(1, "공원 앞", "서구"),
        rack(2, "공원 뒤", "중구"),
        rack(3, "시장", "서구"),
    ]);
    let query = RackQuery::new("공원", DistrictFilter::parse("서구"));
    let page = store.query(&query, 1);

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].rack.id, RackId::Feed(1));
}

#[test]
fn facets_are_distinct_sorted_and_start_with_sentinel() {
    let store = RackStore::from_racks(vec![
        rack(1, "a", "중구"),
        rack(2, "b", "강화군"),
        rack(3, "c", ""),
        rack(4, "d", "중구"),
        rack(5, "e", "구역(99999)"),
        rack(6, "f", "계양구"),
    ]);

    let labels: Vec<String> = store
        .district_facets()
        .iter()
        .map(|f| f.label().to_string())
        .collect();
    assert_eq!(
        labels,
        vec![ALL_DISTRICTS, "강화군", "계양구", "구역(99999)", "중구"]
    );
    assert_eq!(district_facets(&[]), vec![DistrictFilter::All]);
}

#[test]
fn out_of_range_pages_are_clamped() {
    let store = RackStore::from_racks(racks(60, &["서구"]));
    let query = RackQuery::default();

    let low = store.query(&query, 0);
    assert_eq!(low.pagination.page, 1);
    assert_eq!(low.items.len(), 50);

    let high = store.query(&query, 42);
    assert_eq!(high.pagination.page, 2);
    assert_eq!(high.items.len(), 10);
    assert!(high.pagination.has_previous());
    assert!(!high.pagination.has_next());

    let none = store.query(&RackQuery::new("없음", DistrictFilter::All), 3);
    assert_eq!(none.pagination.page, 1);
    assert_eq!(none.pagination.page_count, 0);
    assert!(none.items.is_empty());
}

#[test]
fn listed_racks_carry_favorite_flags() {
    let mut store = RackStore::from_racks(racks(3, &["서구"]));
    store.add_favorite(RackId::Feed(2));

    let page = store.query(&RackQuery::default(), 1);
    let flags: Vec<bool> = page.items.iter().map(|item| item.is_favorite).collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn changing_filters_resets_to_first_page() {
    let store = RackStore::from_racks(racks(200, &["서구", "중구"]));
    let mut browse = BrowseState::new();

    browse.go_to(3);
    assert_eq!(browse.view(&store).pagination.page, 3);

    browse.set_text("보관소");
    assert_eq!(browse.page(), 1);

    browse.next();
    browse.next();
    browse.set_district(DistrictFilter::parse("중구"));
    assert_eq!(browse.page(), 1);
    assert_eq!(browse.view(&store).pagination.page_count, 2);
}

#[test]
fn browse_view_keeps_the_clamped_page() {
    let store = RackStore::from_racks(racks(70, &["서구"]));
    let mut browse = BrowseState::new();

    browse.go_to(10);
    let page = browse.view(&store);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(browse.page(), 2);

    browse.previous();
    browse.previous();
    assert_eq!(browse.page(), 1);
}
