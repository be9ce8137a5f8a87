//! Policy and statement wire vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use gnfd_core::policy::{decode_policy, decode_statement, encode_policy, encode_statement};
use gnfd_core::GnfdError;

mod vector_loader;
use vector_loader::{load, ExpectError, TestVector};

fn check_error(v: &TestVector, err: GnfdError, ex: &ExpectError) {
    assert_eq!(err.code().as_str(), ex.code, "vector={}", v.description);
    if let Some(detail) = &ex.detail {
        assert!(err.to_string().contains(detail.as_str()), "vector={} err={err}", v.description);
    }
}

#[test]
fn statement_vectors() {
    let files = [
        "statement_allow_get_list.json",
        "statement_bad_effect.json",
        "statement_unknown_action.json",
    ];

    for f in files {
        let v = load(f);
        assert_eq!(v.kind, "statement", "vector={}", v.description);
        let res = decode_statement(&v.input.decode());

        if let Some(ex) = &v.expect_error {
            check_error(&v, res.expect_err("expected error"), ex);
            continue;
        }

        let stmt = res.expect("expected ok statement");
        let ex = v.expect.as_ref().expect("missing expect block");

        let out = encode_statement(&stmt).unwrap();
        assert_eq!(
            std::str::from_utf8(&out).unwrap(),
            ex["canonical"].as_str().unwrap(),
            "vector={}",
            v.description
        );

        let chain = &ex["chain"];
        assert_eq!(
            stmt.effect.to_chain_code().code() as i64,
            chain["effect"].as_i64().unwrap(),
            "vector={}",
            v.description
        );
        let codes: Vec<i64> = stmt
            .chain_actions()
            .unwrap()
            .into_iter()
            .map(|a| a.code() as i64)
            .collect();
        let want: Vec<i64> = chain["actions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c.as_i64().unwrap())
            .collect();
        assert_eq!(codes, want, "vector={}", v.description);
    }
}

#[test]
fn policy_vectors() {
    let files = [
        "policy_empty.json",
        "policy_multi_base64.json",
        "policy_second_statement_invalid.json",
        "policy_unknown_key.json",
        "policy_truncated_hex.json",
    ];

    for f in files {
        let v = load(f);
        assert_eq!(v.kind, "policy", "vector={}", v.description);
        let res = decode_policy(&v.input.decode());

        if let Some(ex) = &v.expect_error {
            check_error(&v, res.expect_err("expected error"), ex);
            continue;
        }

        let policy = res.expect("expected ok policy");
        let ex = v.expect.as_ref().expect("missing expect block");

        assert_eq!(
            policy.statements.len() as u64,
            ex["statements"].as_u64().unwrap(),
            "vector={}",
            v.description
        );

        let out = encode_policy(&policy).unwrap();
        assert_eq!(
            std::str::from_utf8(&out).unwrap(),
            ex["canonical"].as_str().unwrap(),
            "vector={}",
            v.description
        );
        assert_eq!(decode_policy(&out).unwrap(), policy, "vector={}", v.description);
    }
}
