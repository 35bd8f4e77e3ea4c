//! HTTP surface of the site.
//!
//! # Pages
//!
//! - `GET /` - full page, `?lang=xx` switches language
//! - `POST /language` - language switcher form
//! - `POST /promotion/dismiss` - close the promotion toast
//! - `GET /rooms/{id}/gallery` - page with the room gallery open
//! - `POST /rooms/{id}/gallery/next`, `.../prev`, `/rooms/gallery/close`
//! - `GET|POST /matcher`, `POST /matcher/close` - AI room matcher
//! - `GET|POST /chat`, `POST /chat/close` - chat widget
//! - `GET|POST /reservation`, `POST /reservation/close` - mock reservation
//!
//! # JSON API (`/api`)
//!
//! - `GET /api/health`
//! - `GET /api/languages`
//! - `GET /api/content/{lang}`
//! - `GET /api/rooms?lang=xx`
//! - `GET /api/rates`
//! - `POST /api/matcher`, `POST /api/chat`, `POST /api/reservation`
//!
//! Routes of a disabled feature answer `404`. The OpenAPI document is
//! served at `/api-docs/openapi.json`, and with the `swagger-ui` feature
//! interactive docs are at `/swagger-ui/`.

/// OpenAPI document.
pub mod docs;
/// Request handlers for all routes.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;
