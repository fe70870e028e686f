use actix_web::{Responder, get, post, web::{Data, Json}};
use pagewin_common::*;
use serde_qs::actix::QsQuery;
use tracing::debug;

use crate::{config::PaginationConfig, log_n_reject};

mod macros;

/// Compute pagination control state for request
fn paginate(
    req: &PaginationRequest, 
    cfg: &PaginationConfig
) -> Option<PaginationResponse> {
    let range = PageRange::new(req.first, req.last)?;
    let pager = Pagination::new(req.current, range, &req.path)
        .with_middle_labels(cfg.middle_labels);

    let instr = pager.instruction();
    let layout = req.viewport_width
        .map(|w| LayoutMode::select_with(w, cfg.mobile_max_width))
        .unwrap_or_default();

    debug!(
        current=req.current, 
        first=req.first, 
        last=req.last, 
        active=?instr.active_slot(), 
        ?layout, 
        "computed pagination"
    );

    Some(PaginationResponse {
        links: instr.links(&pager.path),
        ellipsis: instr.ellipsis(),
        layout,
        windowed: instr.is_windowed(),
    })
}

/// Pagination state, JSON body
#[post("/v1/pagination")]
pub async fn pagination(
    Json(req): Json<PaginationRequest>, 
    cfg: Data<PaginationConfig>
) -> impl Responder {
    match paginate(&req, &cfg) {
        Some(resp) => Ok(Json(resp)),
        None => {
            log_n_reject!("invalid page range", first=req.first, last=req.last);
        }
    }
}

/// Pagination state, query string
#[get("/v1/pagination")]
pub async fn pagination_query(
    req: QsQuery<PaginationRequest>,
    cfg: Data<PaginationConfig>
) -> impl Responder {
    let req = req.into_inner();
    match paginate(&req, &cfg) {
        Some(resp) => Ok(Json(resp)),
        None => {
            log_n_reject!("invalid page range", first=req.first, last=req.last);
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode};
    use actix_web::test::{init_service, call_service, call_and_read_body_json, TestRequest};
    use super::*;

    fn app_config() -> Data<PaginationConfig> {
        Data::new(PaginationConfig::default())
    }

    #[actix_web::test]
    async fn test_post_pagination() {
        let app = init_service(
            App::new()
                .app_data(app_config())
                .service(pagination)
        ).await;

        let req = TestRequest::post()
            .uri("/v1/pagination")
            .set_json(PaginationRequest {
                current: 19,
                first: 1,
                last: 20,
                path: "/papers?keywords=nets&amp;page=19".into(),
                viewport_width: Some(600),
            })
            .to_request();
        let resp: PaginationResponse = call_and_read_body_json(&app, req).await;

        assert!(resp.windowed);
        assert_eq!(resp.layout, LayoutMode::Mobile);
        assert_eq!(resp.links.len(), SLOT_COUNT);
        assert_eq!(resp.links[0].label, Some(1));
        assert_eq!(resp.links[4].href.as_deref(), Some("/papers?keywords=nets&page=19"));
        assert!(resp.links[4].active);
        assert_eq!(resp.ellipsis, EllipsisVisibility { show_leading: true, show_trailing: false });
    }

    #[actix_web::test]
    async fn test_get_pagination() {
        let app = init_service(
            App::new()
                .app_data(app_config())
                .service(pagination_query)
        ).await;

        let req = TestRequest::get()
            .uri("/v1/pagination?current=2&first=1&last=3")
            .to_request();
        let resp: PaginationResponse = call_and_read_body_json(&app, req).await;

        assert!(!resp.windowed);
        assert_eq!(resp.layout, LayoutMode::Desktop);
        assert_eq!(resp.links[1].href.as_deref(), Some("?page=2"));
        assert!(!resp.links[3].visible);
    }

    #[actix_web::test]
    async fn test_invalid_range() {
        let app = init_service(
            App::new()
                .app_data(app_config())
                .service(pagination)
        ).await;

        let req = TestRequest::post()
            .uri("/v1/pagination")
            .set_json(PaginationRequest { current: 1, first: 5, last: 2, ..Default::default() })
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_recompute_middle() {
        let cfg = PaginationConfig { middle_labels: MiddleLabels::Recompute, ..Default::default() };
        let req = PaginationRequest { current: 7, first: 1, last: 20, ..Default::default() };
        let resp = paginate(&req, &cfg).unwrap();
        let labels: Vec<_> = resp.links.iter().map(|l| l.label).collect();
        assert_eq!(labels, [Some(5), Some(6), Some(7), Some(8), Some(9)]);
    }
}
