//! Tests for request signing.

use serde_json::json;

use super::sign::{canonical_string, flatten, hmac_sha256_hex};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

mod flattening {
    use super::*;

    #[test]
    fn nested_objects_use_dotted_keys() {
        let value = json!({
            "sn": "SN1",
            "params": { "cfgEnergyBackup": { "energyBackupStartSoc": 70, "energyBackupEn": true } }
        });

        assert_eq!(
            flatten(&value),
            pairs(&[
                ("params.cfgEnergyBackup.energyBackupEn", "true"),
                ("params.cfgEnergyBackup.energyBackupStartSoc", "70"),
                ("sn", "SN1"),
            ])
        );
    }

    #[test]
    fn arrays_use_indexed_keys() {
        let value = json!({ "ids": [3, 4] });
        assert_eq!(flatten(&value), pairs(&[("ids[0]", "3"), ("ids[1]", "4")]));
    }

    #[test]
    fn keys_sort_bytewise() {
        let value = json!({ "b": 1, "a": 2, "B": 3, "cmdId": 17, "cmdFunc": 254 });
        let keys: Vec<String> = flatten(&value).into_iter().map(|(k, _)| k).collect();

        assert_eq!(keys, ["B", "a", "b", "cmdFunc", "cmdId"]);
    }

    #[test]
    fn nulls_and_bare_scalars_produce_nothing() {
        assert!(flatten(&json!({ "x": null })).is_empty());
        assert!(flatten(&json!("alone")).is_empty());
        assert!(flatten(&json!({})).is_empty());
    }

    #[test]
    fn strings_are_not_quoted() {
        assert_eq!(flatten(&json!({ "sn": "A B" })), pairs(&[("sn", "A B")]));
    }
}

mod canonical {
    use super::*;

    #[test]
    fn without_params_only_auth_fields() {
        assert_eq!(
            canonical_string(&[], "AK", "123456", "1700000000000"),
            "accessKey=AK&nonce=123456&timestamp=1700000000000"
        );
    }

    #[test]
    fn params_precede_auth_fields() {
        assert_eq!(
            canonical_string(&pairs(&[("sn", "SN1")]), "AK", "123456", "1700000000000"),
            "sn=SN1&accessKey=AK&nonce=123456&timestamp=1700000000000"
        );
    }

    #[test]
    fn multiple_params_joined_in_given_order() {
        let params = pairs(&[("a", "1"), ("b.c", "true")]);
        assert_eq!(
            canonical_string(&params, "AK", "1", "2"),
            "a=1&b.c=true&accessKey=AK&nonce=1&timestamp=2"
        );
    }
}

mod mac {
    use super::*;

    /// RFC 4231, test case 2.
    #[test]
    fn matches_rfc4231_vector() {
        assert_eq!(
            hmac_sha256_hex("Jefe", "what do ya want for nothing?").unwrap(),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn output_is_lowercase_hex() {
        let signature = hmac_sha256_hex("secret", "message").unwrap();

        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn empty_key_is_accepted() {
        assert!(hmac_sha256_hex("", "message").is_ok());
    }
}
