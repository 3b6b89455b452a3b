//! End-to-end tests through the full axum router.

mod scenario;

use stockroom_test_utils::prelude::*;

use crate::util::{body_bytes, body_json, empty_request, json_request, TestContextExt};
