#![allow(missing_docs)]

pub(crate) mod backend;
pub(crate) mod fixtures;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use backend::{spawn_backend, spawn_backend_expecting_token};
pub(crate) use fixtures::{
    inbound, many_backend_body, outbound, sample_backend_body, sample_transactions,
};
pub(crate) use html::{
    assert_valid_html, must_select, parse_html_document, parse_html_fragment, select_texts,
};
pub(crate) use http::{assert_content_type, assert_status_ok};
