//! Name-service test vectors
//!
//! Fixed inputs with known expected outputs: program IDs, the header byte
//! layout, timestamp formatting and the `test.skr` lookup scenario.

#[cfg(test)]
mod name_service_vectors {
    use std::str::FromStr;

    use crate::derivation::{
        DomainAddresses, DomainKeys, DEFAULT_DOMAIN, NAME_SERVICE_PROGRAM_ID, TLD_HOUSE_PROGRAM_ID,
    };
    use crate::resolver::format_unix_time;
    use crate::state::NameRecordHeader;
    use solana_sdk::pubkey::Pubkey;

    /// ANS root account
    const ROOT_ACCOUNT: &str = "3mX9b4AZaQehNoQGfckVcmgmA6bkBoFcbLj9RMmMyNcU";

    /// `.skr` under the root
    const SKR_DOMAIN_ACCOUNT: &str = "F3A8kuikEiu6k2399oSJ1PWfcJYDHqpwoQ2e8psSDNuF";

    /// `.skr` TLD house
    const SKR_TLD_HOUSE: &str = "4RKP4BEMu5sXBfXSH7xN2owtQrnAJvhhwtBBmj9JEYkA";

    /// `test.skr` name account
    const TEST_SKR_NAME_ACCOUNT: &str = "GZMTpxN8WHWihaQ1tAoZSDxYjPKWh1HkygpqNgZrNN8M";

    /// `test.skr` reverse-lookup account
    const TEST_SKR_TLD_ACCOUNT: &str = "GV69zoW8ZZ32V7vrbURntokcnQHcMFpxNyARXtuLr1LJ";

    /// Owner of the fixture account
    const FIXTURE_OWNER: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

    /// Class of the fixture account
    const FIXTURE_CLASS: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

    /// 2024-08-01T00:00:00Z
    const FIXTURE_CREATED_AT: i64 = 1_722_470_400;

    /// Header bytes as stored on chain for the fixture, field by field
    fn fixture_account(name: &Pubkey) -> Vec<u8> {
        let owner = Pubkey::from_str(FIXTURE_OWNER).unwrap();
        let class = Pubkey::from_str(FIXTURE_CLASS).unwrap();

        let mut data = vec![0x68, 0x7e, 0x2b, 0x1c, 0x90, 0x55, 0xa3, 0x0f];
        data.extend_from_slice(name.as_ref());
        data.extend_from_slice(owner.as_ref());
        data.extend_from_slice(class.as_ref());
        // expires_at = 0
        data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0]);
        // created_at = 0x66aad000 little-endian
        data.extend_from_slice(&[0x00, 0xd0, 0xaa, 0x66, 0, 0, 0, 0]);
        // non_transferable
        data.push(1);
        // record payload
        data.extend_from_slice(&[0u8; 32]);
        data
    }

    #[test]
    fn test_vector_program_ids() {
        assert_eq!(
            NAME_SERVICE_PROGRAM_ID.to_string(),
            "ALTNSZ46uaAUU7XUV6awvdorLGqAsPwa9shm7h4uP2FK"
        );
        assert_eq!(
            TLD_HOUSE_PROGRAM_ID.to_string(),
            "TLDHkysf5pCnKsVA4gXpNvmy7psXLPEu4LAdDJthT9S"
        );
        assert_eq!(DEFAULT_DOMAIN, ".skr");
    }

    #[test]
    fn test_vector_skr_domain_keys() {
        let keys = DomainKeys::derive(".skr");

        assert_eq!(keys.root_account.to_string(), ROOT_ACCOUNT);
        assert_eq!(keys.domain_account.to_string(), SKR_DOMAIN_ACCOUNT);
        assert_eq!(keys.domain_tld_account.to_string(), SKR_TLD_HOUSE);
    }

    #[test]
    fn test_vector_tld_house_is_case_insensitive() {
        let keys = DomainKeys::derive(".SKR");

        assert_eq!(keys.domain_tld_account.to_string(), SKR_TLD_HOUSE);
        assert_ne!(keys.domain_account.to_string(), SKR_DOMAIN_ACCOUNT);
    }

    #[test]
    fn test_vector_created_at_bytes() {
        assert_eq!(FIXTURE_CREATED_AT, 0x66aa_d000);
        assert_eq!(format_unix_time(FIXTURE_CREATED_AT), "2024-08-01T00:00:00.000Z");
    }

    #[test]
    fn test_vector_timestamp_format() {
        assert_eq!(format_unix_time(0), "1970-01-01T00:00:00.000Z");
        assert_eq!(format_unix_time(1_700_000_000), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_vector_owner_offset() {
        let name = Pubkey::new_unique();
        let data = fixture_account(&name);
        let owner = Pubkey::from_str(FIXTURE_OWNER).unwrap();

        assert_eq!(&data[8..40], name.as_ref());
        assert_eq!(&data[40..72], owner.as_ref());
        assert_eq!(data[120], 1);
    }

    /// Scenario: `test.skr`
    ///
    /// Derive the accounts, decode a stored header for the name account and
    /// check the values a lookup would report.
    #[test]
    fn test_vector_test_skr_scenario() {
        let addresses = DomainAddresses::derive(".skr", "test");
        assert_eq!(addresses.domain.root_account.to_string(), ROOT_ACCOUNT);
        assert_eq!(addresses.domain.domain_account.to_string(), SKR_DOMAIN_ACCOUNT);
        assert_eq!(addresses.domain.domain_tld_account.to_string(), SKR_TLD_HOUSE);
        assert_eq!(addresses.name_account.to_string(), TEST_SKR_NAME_ACCOUNT);
        assert_eq!(addresses.tld_account.to_string(), TEST_SKR_TLD_ACCOUNT);

        let data = fixture_account(&addresses.name_account);
        let header = NameRecordHeader::try_from_account_data(&data).unwrap();

        assert_eq!(header.name, addresses.name_account);
        assert_eq!(header.owner.to_string(), FIXTURE_OWNER);
        assert_eq!(header.class.to_string(), FIXTURE_CLASS);
        assert_eq!(header.created_at, FIXTURE_CREATED_AT);
        assert_eq!(header.expiry(), None);
        assert!(header.non_transferable);
    }
}
