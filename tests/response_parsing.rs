//! Raw API responses become domain values or `NotionService` errors.

use notion_crud::{
    parse_block_response, parse_blocks_results, parse_database_response, parse_page_response,
    parse_pages_results, AppError, ApiResponse, Block, NotionErrorCode, Parent, PropertyValue,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

const ANNOTATIONS: &str = r#"{"bold": false, "italic": false, "strikethrough": false, "underline": false, "code": false, "color": "default"}"#;

fn ok(body: String) -> ApiResponse<String> {
    ApiResponse {
        data: body,
        status: StatusCode::OK,
        url: "test_url".to_string(),
    }
}

fn text_run(content: &str) -> String {
    format!(
        r#"{{"type": "text", "text": {{"content": "{content}", "link": null}}, "plain_text": "{content}", "href": null, "annotations": {ANNOTATIONS}}}"#
    )
}

fn task_page_json(id: &str, name: &str) -> String {
    format!(
        r#"{{
        "object": "page",
        "id": "{id}",
        "created_time": "2025-06-20T00:00:00.000Z",
        "last_edited_time": "2025-06-20T00:00:00.000Z",
        "created_by": {{"object": "user", "id": "user-id"}},
        "last_edited_by": {{"object": "user", "id": "user-id"}},
        "parent": {{"type": "database_id", "database_id": "a1b2c3d4-e5f6-7890-abcd-ef1234567890"}},
        "archived": false,
        "url": "https://www.notion.so/{id}",
        "properties": {{
            "Name": {{"id": "title", "type": "title", "title": [{run}]}},
            "Status": {{"id": "st", "type": "select", "select": {{"id": "opt", "name": "In Progress", "color": "yellow"}}}},
            "Due Date": {{"id": "dd", "type": "date", "date": {{"start": "2025-06-15", "end": null, "time_zone": null}}}},
            "Notes": {{"id": "nt", "type": "rich_text", "rich_text": [{notes}]}},
            "Estimate": {{"id": "es", "type": "number", "number": 3}}
        }}
    }}"#,
        run = text_run(name),
        notes = text_run("Sync data"),
    )
}

fn block_json(id: &str, kind: &str, body: &str) -> String {
    format!(
        r#"{{
        "object": "block",
        "id": "{id}",
        "parent": {{"type": "page_id", "page_id": "414cd412-8533-8087-a989-cf37889137c5"}},
        "created_time": "2025-06-20T00:00:00.000Z",
        "last_edited_time": "2025-06-20T00:00:00.000Z",
        "created_by": {{"object": "user", "id": "user-id"}},
        "last_edited_by": {{"object": "user", "id": "user-id"}},
        "has_children": false,
        "archived": false,
        "type": "{kind}",
        "{kind}": {body}
    }}"#
    )
}

#[test]
fn page_title_comes_from_the_title_property() {
    let page = parse_page_response(ok(task_page_json(
        "216cd412-8533-8087-a989-cf37889137c3",
        "Implement API integration",
    )))
    .expect("page parses");

    assert_eq!(page.title().as_str(), "Implement API integration");
    assert_eq!(page.id.as_str(), "216cd41285338087a989cf37889137c3");
    assert!(matches!(page.parent, Some(Parent::Database { .. })));
    assert_eq!(
        page.property("Status"),
        Some(&PropertyValue::Select(Some("In Progress".to_string())))
    );
    assert_eq!(
        page.property("Due Date"),
        Some(&PropertyValue::Date(chrono::NaiveDate::from_ymd_opt(2025, 6, 15)))
    );
    assert_eq!(
        page.property("Notes").map(PropertyValue::display_text).as_deref(),
        Some("Sync data")
    );
    assert_eq!(
        page.property("Estimate"),
        Some(&PropertyValue::Other {
            property_type: "number".to_string()
        })
    );
}

#[test]
fn page_without_title_property_has_empty_title() {
    let json = r#"{
        "object": "page",
        "id": "316cd412-8533-8087-a989-cf37889137c4",
        "created_time": "2025-06-20T00:00:00.000Z",
        "last_edited_time": "2025-06-20T00:00:00.000Z",
        "created_by": {"object": "user", "id": "user-id"},
        "last_edited_by": {"object": "user", "id": "user-id"},
        "parent": {"type": "workspace", "workspace": true},
        "archived": false,
        "properties": {},
        "url": "https://www.notion.so/test-page"
    }"#;

    let page = parse_page_response(ok(json.to_string())).expect("page parses");
    assert!(page.title().is_empty());
    assert_eq!(page.parent, Some(Parent::Workspace));
}

#[test]
fn query_results_keep_order_and_cursor() {
    let json = format!(
        r#"{{"object": "list", "results": [{}, {}], "next_cursor": "abc", "has_more": true}}"#,
        task_page_json("216cd412-8533-8087-a989-cf37889137c3", "First"),
        task_page_json("316cd412-8533-8087-a989-cf37889137c4", "Second"),
    );

    let results = parse_pages_results(ok(json)).expect("query parses");
    let titles: Vec<&str> = results.results.iter().map(|p| p.title().as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
    assert!(results.has_more);
    assert_eq!(results.next_cursor.as_deref(), Some("abc"));
}

#[test]
fn block_list_yields_typed_blocks() {
    let paragraph = block_json(
        "116cd412-8533-8087-a989-cf37889137c1",
        "paragraph",
        &format!(r#"{{"rich_text": [{}], "color": "default"}}"#, text_run("Hello")),
    );
    let heading = block_json(
        "216cd412-8533-8087-a989-cf37889137c2",
        "heading_2",
        &format!(
            r#"{{"rich_text": [{}], "color": "default", "is_toggleable": false}}"#,
            text_run("Task List")
        ),
    );
    let code = block_json(
        "316cd412-8533-8087-a989-cf37889137c3",
        "code",
        &format!(
            r#"{{"rich_text": [{}], "caption": [], "language": "javascript"}}"#,
            text_run("let x = 1;")
        ),
    );
    let divider = block_json("416cd412-8533-8087-a989-cf37889137c4", "divider", "{}");

    let json = format!(
        r#"{{"object": "list", "results": [{paragraph}, {heading}, {code}, {divider}], "next_cursor": null, "has_more": false}}"#
    );
    let blocks = parse_blocks_results(ok(json)).expect("blocks parse").results;

    let types: Vec<&str> = blocks.iter().map(Block::block_type).collect();
    assert_eq!(types, vec!["paragraph", "heading_2", "code", "divider"]);
    assert_eq!(blocks[0].plain_text().as_deref(), Some("Hello"));
    assert_eq!(blocks[1].plain_text().as_deref(), Some("Task List"));
    match &blocks[2] {
        Block::Code(code) => assert_eq!(code.language, "javascript"),
        other => panic!("expected code block, got {:?}", other),
    }
    assert!(matches!(blocks[3], Block::Unsupported(_)));
}

#[test]
fn deleted_block_comes_back_archived() {
    let mut json: serde_json::Value = serde_json::from_str(&block_json(
        "116cd412-8533-8087-a989-cf37889137c1",
        "paragraph",
        &format!(r#"{{"rich_text": [{}], "color": "default"}}"#, text_run("Bye")),
    ))
    .unwrap();
    json["archived"] = serde_json::Value::Bool(true);

    let block = parse_block_response(ok(json.to_string())).expect("block parses");
    assert!(block.common().archived);
    assert!(block.is_paragraph());
}

#[test]
fn database_title_and_columns() {
    let json = format!(
        r#"{{
        "object": "database",
        "id": "a02dd81a-36b6-4c1b-9c74-bb5c7c2e8ea2",
        "created_time": "2025-06-20T00:00:00.000Z",
        "last_edited_time": "2025-06-20T00:00:00.000Z",
        "created_by": {{"object": "user", "id": "user-id"}},
        "last_edited_by": {{"object": "user", "id": "user-id"}},
        "title": [{}],
        "description": [],
        "icon": null,
        "cover": null,
        "properties": {{
            "Name": {{"id": "title", "name": "Name", "type": "title", "title": {{}}}},
            "Due Date": {{"id": "dd", "name": "Due Date", "type": "date", "date": {{}}}}
        }},
        "parent": {{"type": "page_id", "page_id": "b2c3d4e5-f678-9012-abcd-ef1234567890"}},
        "url": "https://www.notion.so/Database",
        "archived": false,
        "is_inline": false
    }}"#,
        text_run("Tasks")
    );

    let database = parse_database_response(ok(json)).expect("database parses");
    assert_eq!(database.title().as_plain_text(), "Tasks");
    let columns: Vec<&str> = database.property_names.iter().map(|p| p.as_str()).collect();
    assert_eq!(columns, vec!["Due Date", "Name"]);
}

#[test]
fn error_body_becomes_notion_service_error() {
    let body = r#"{"object": "error", "status": 400, "code": "validation_error", "message": "body failed validation: body.parent should be defined"}"#;

    let err = parse_page_response(ApiResponse {
        data: body.to_string(),
        status: StatusCode::BAD_REQUEST,
        url: "https://api.notion.com/v1/pages".to_string(),
    })
    .unwrap_err();

    match &err {
        AppError::NotionService {
            code,
            message,
            status,
            body: raw,
        } => {
            assert_eq!(*code, NotionErrorCode::ValidationFailed);
            assert_eq!(message, "body failed validation: body.parent should be defined");
            assert_eq!(*status, StatusCode::BAD_REQUEST);
            assert_eq!(raw.as_deref(), Some(body));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.describe(), body);
}

#[test]
fn unparseable_error_body_falls_back_to_status() {
    let err = parse_block_response(ApiResponse {
        data: "<html>Bad Gateway</html>".to_string(),
        status: StatusCode::BAD_GATEWAY,
        url: "https://api.notion.com/v1/blocks/x".to_string(),
    })
    .unwrap_err();

    match &err {
        AppError::NotionService { code, body, .. } => {
            assert_eq!(*code, NotionErrorCode::HttpStatus(502));
            assert!(body.is_none());
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.describe().contains("502"));
}

#[test]
fn malformed_success_body_is_a_client_error() {
    let err = parse_page_response(ok("{not json".to_string())).unwrap_err();
    assert!(matches!(err, AppError::NotionClient(_)));
}
