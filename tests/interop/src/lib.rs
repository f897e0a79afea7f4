//! Integration tests for tlsparams.
//! Drive the security parameters the way a handshake layer, record layer
//! and application would, through the public API only.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tlsparams::certificate::Certificate;
    use tlsparams::channel_binding::ChannelBinding;
    use tlsparams::config::ConnectionConfig;
    use tlsparams::connection::ConnectionContext;
    use tlsparams::crypt::secret::{SecretBytes, SecretSlot, TlsSecret};
    use tlsparams::crypt::{KeyExchangeAlg, PrfAlgorithm};
    use tlsparams::extensions::ProtocolName;
    use tlsparams::params::{RecordState, SecurityParameters};
    use tlsparams::{CipherSuite, ProtocolVersion, TlsRole};
    use tlsparams_types::{SecretError, TlsError};

    struct CountingSecret {
        key: Vec<u8>,
        destroys: Arc<AtomicUsize>,
        fail: bool,
        destroyed: bool,
    }

    fn counting(fail: bool) -> (CountingSecret, Arc<AtomicUsize>) {
        keyed(vec![0; 32], fail)
    }

    fn keyed(key: Vec<u8>, fail: bool) -> (CountingSecret, Arc<AtomicUsize>) {
        let destroys = Arc::new(AtomicUsize::new(0));
        (
            CountingSecret {
                key,
                destroys: destroys.clone(),
                fail,
                destroyed: false,
            },
            destroys,
        )
    }

    impl TlsSecret for CountingSecret {
        fn destroy(&mut self) -> Result<(), SecretError> {
            self.destroys.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(SecretError::DestroyFailed("token removed".into()));
            }
            self.key.iter_mut().for_each(|b| *b = 0);
            self.destroyed = true;
            Ok(())
        }

        fn is_destroyed(&self) -> bool {
            self.destroyed
        }

        fn with_bytes(&self, f: &mut dyn FnMut(&[u8])) -> Result<(), SecretError> {
            if self.destroyed {
                return Err(SecretError::AlreadyDestroyed);
            }
            f(&self.key);
            Ok(())
        }
    }

    fn n(d: &Arc<AtomicUsize>) -> usize {
        d.load(Ordering::SeqCst)
    }

    /// Inputs a record layer needs to key its read and write cipher states.
    #[derive(Debug, PartialEq)]
    struct RecordKeys {
        suite: CipherSuite,
        prf: PrfAlgorithm,
        verify_data_length: usize,
        client_write: Vec<u8>,
        server_write: Vec<u8>,
    }

    fn copy_key(secret: &dyn TlsSecret) -> Option<Vec<u8>> {
        let mut key = Vec::new();
        secret.with_bytes(&mut |b| key.extend_from_slice(b)).ok()?;
        Some(key)
    }

    /// What a record layer pulls out before building cipher states.
    fn record_layer_view(params: &SecurityParameters) -> Option<RecordKeys> {
        Some(RecordKeys {
            suite: params.cipher_suite(),
            prf: params.prf_algorithm()?,
            verify_data_length: params.verify_data_length()?,
            client_write: copy_key(params.traffic_secret_client()?)?,
            server_write: copy_key(params.traffic_secret_server()?)?,
        })
    }

    // -------------------------------------------------------
    // Scenario A: role and cipher suite on a fresh record
    // -------------------------------------------------------
    #[test]
    fn test_scenario_a() {
        let mut params = SecurityParameters::new();
        {
            let mut w = params.writer();
            w.set_entity(TlsRole::Client).unwrap();
            w.set_cipher_suite(CipherSuite::TLS_AES_256_GCM_SHA384);
        }
        assert_eq!(params.entity(), Some(TlsRole::Client));
        assert_eq!(params.cipher_suite(), CipherSuite::TLS_AES_256_GCM_SHA384);
        for slot in SecretSlot::ALL {
            assert!(params.secret(slot).is_none());
        }
        // Premature reads are absent, not errors.
        assert!(record_layer_view(&params).is_none());
    }

    // -------------------------------------------------------
    // Scenario B: replacing the master secret destroys the old one
    // -------------------------------------------------------
    #[test]
    fn test_scenario_b() {
        let mut params = SecurityParameters::new();
        let (s1, d1) = counting(false);
        let (s2, d2) = counting(false);
        params.writer().set_master_secret(s1).unwrap();
        params.writer().set_master_secret(s2).unwrap();
        assert_eq!(n(&d1), 1);
        assert_eq!(n(&d2), 0);
        assert!(!params.master_secret().unwrap().is_destroyed());
    }

    // -------------------------------------------------------
    // Scenario C: full TLS 1.3 handshake, then teardown
    // -------------------------------------------------------
    #[test]
    fn test_scenario_c() {
        let server_chain = Arc::new(Certificate::new(vec![vec![0x30, 0x82, 0x01, 0x0A]]));
        let config = ConnectionConfig::builder().role(TlsRole::Client).build();
        let mut ctx = ConnectionContext::new(config);
        let mut counters = Vec::new();
        {
            let mut w = ctx.handshake().unwrap();
            w.set_client_random([1; 32]);
            w.set_server_random([2; 32]);
            w.set_negotiated_version(ProtocolVersion::TLS_V1_3);
            w.set_cipher_suite(CipherSuite::TLS_AES_128_GCM_SHA256);
            w.set_prf_algorithm(PrfAlgorithm::Tls13HkdfSha256);
            w.set_verify_data_length(32);
            w.set_key_exchange_algorithm(KeyExchangeAlg::Tls13);
            for (i, slot) in SecretSlot::ALL.into_iter().enumerate() {
                let (s, d) = keyed(vec![i as u8 + 1; 32], false);
                w.set_secret(slot, Box::new(s)).unwrap();
                counters.push(d);
            }
            w.set_application_protocol(Some(ProtocolName::http_2()));
            w.set_peer_certificate(server_chain.clone());
            w.set_local_verify_data(vec![0xC1; 32]);
            w.set_peer_verify_data(vec![0x5E; 32]);
            w.set_tls_server_end_point(vec![0xEE; 32]);
        }
        ctx.complete_handshake().unwrap();

        assert_eq!(
            record_layer_view(ctx.security_parameters()),
            Some(RecordKeys {
                suite: CipherSuite::TLS_AES_128_GCM_SHA256,
                prf: PrfAlgorithm::Tls13HkdfSha256,
                verify_data_length: 32,
                client_write: vec![5; 32],
                server_write: vec![6; 32],
            })
        );
        // Reading keys does not consume them.
        assert!(record_layer_view(ctx.security_parameters()).is_some());
        let info = ctx.connection_info().unwrap();
        assert_eq!(info.alpn_protocol, Some(ProtocolName::http_2()));
        assert!(matches!(
            ctx.export_channel_binding(ChannelBinding::TlsUnique),
            Err(TlsError::ChannelBindingUnavailable(_))
        ));

        ctx.close().unwrap();
        let params = ctx.security_parameters();
        for slot in SecretSlot::ALL {
            assert!(params.secret(slot).is_none());
        }
        assert!(record_layer_view(params).is_none());
        for d in &counters {
            assert_eq!(n(d), 1);
        }
        assert!(Arc::ptr_eq(params.peer_certificate().unwrap(), &server_chain));
        assert_eq!(params.local_verify_data(), Some(&[0xC1; 32][..]));
        assert_eq!(params.peer_verify_data(), Some(&[0x5E; 32][..]));
        assert_eq!(params.state(), RecordState::Cleared);
    }

    // -------------------------------------------------------
    // Scenario D: TLS 1.2 renegotiation installs a new epoch
    // -------------------------------------------------------
    #[test]
    fn test_scenario_d() {
        let config = ConnectionConfig::builder()
            .role(TlsRole::Server)
            .allow_renegotiation(true)
            .build();
        let mut ctx = ConnectionContext::new(config);
        let (old_master, d_old) = counting(false);
        {
            let mut w = ctx.handshake().unwrap();
            w.set_negotiated_version(ProtocolVersion::TLS_V1_2);
            w.set_cipher_suite(CipherSuite::TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256);
            w.set_secure_renegotiation(true);
            w.set_master_secret(old_master).unwrap();
            w.set_traffic_secret_client(SecretBytes::new(vec![1; 32])).unwrap();
            w.set_traffic_secret_server(SecretBytes::new(vec![2; 32])).unwrap();
            w.set_session_hash(vec![3; 32]);
            w.set_local_verify_data(vec![4; 12]);
            w.set_peer_verify_data(vec![5; 12]);
        }
        ctx.complete_handshake().unwrap();

        ctx.begin_renegotiation().unwrap();
        assert_eq!(n(&d_old), 1);
        assert!(ctx.security_parameters().session_hash().is_none());
        // RFC 5746 needs the previous Finished values.
        assert_eq!(ctx.security_parameters().peer_verify_data(), Some(&[5; 12][..]));

        let (new_master, d_new) = counting(false);
        ctx.handshake().unwrap().set_master_secret(new_master).unwrap();
        let params = ctx.security_parameters();
        assert!(params.is_renegotiating());
        assert!(params.master_secret().is_some());
        assert!(params.traffic_secret_client().is_none());
        assert_eq!(n(&d_old), 1);
        assert_eq!(n(&d_new), 0);
    }

    // -------------------------------------------------------
    // A destroyed capability lends nothing
    // -------------------------------------------------------
    #[test]
    fn test_destroyed_secret_lends_nothing() {
        let (mut s, _d) = keyed(vec![9; 16], false);
        assert_eq!(copy_key(&s), Some(vec![9; 16]));
        s.destroy().unwrap();
        assert_eq!(copy_key(&s), None);

        let mut sb = SecretBytes::new(vec![9; 16]);
        sb.destroy().unwrap();
        let mut called = false;
        assert_eq!(
            sb.with_bytes(&mut |_| called = true),
            Err(SecretError::AlreadyDestroyed)
        );
        assert!(!called);
    }

    // -------------------------------------------------------
    // Teardown keeps destroying after a failure
    // -------------------------------------------------------
    #[test]
    fn test_teardown_is_total() {
        let mut ctx = ConnectionContext::new(ConnectionConfig::default());
        let (a, da) = counting(false);
        let (b, db) = counting(true);
        let (c, dc) = counting(false);
        {
            let mut w = ctx.handshake().unwrap();
            w.set_early_secret(a).unwrap();
            w.set_shared_secret(b).unwrap();
            w.set_traffic_secret_server(c).unwrap();
        }
        let err = ctx.close().unwrap_err();
        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.failures()[0].slot, "shared");
        assert_eq!((n(&da), n(&db), n(&dc)), (1, 1, 1));
        assert!(ctx.security_parameters().secrets_cleared());
        ctx.close().unwrap();
        assert_eq!(n(&db), 1);
    }

    // -------------------------------------------------------
    // ALPN: negotiated-empty vs. never negotiated
    // -------------------------------------------------------
    #[test]
    fn test_application_protocol_set_flag() {
        let mut ctx = ConnectionContext::new(ConnectionConfig::default());
        ctx.handshake().unwrap();
        ctx.complete_handshake().unwrap();
        let before = ctx.connection_info().unwrap();
        assert!(!before.alpn_negotiated);

        let mut ctx = ConnectionContext::new(ConnectionConfig::default());
        ctx.handshake().unwrap().set_application_protocol(None);
        ctx.complete_handshake().unwrap();
        let after = ctx.connection_info().unwrap();
        assert!(after.alpn_negotiated);
        assert_eq!(after.alpn_protocol, None);
    }
}
