#![no_main]
use libfuzzer_sys::fuzz_target;
use tlsparams::config::ConnectionConfig;
use tlsparams::connection::ConnectionContext;
use tlsparams::crypt::secret::{SecretBytes, SecretSlot};
use tlsparams::params::RecordState;
use tlsparams::TlsRole;

fuzz_target!(|data: &[u8]| {
    let config = ConnectionConfig::builder()
        .role(if data.first().copied().unwrap_or(0) & 1 == 0 {
            TlsRole::Client
        } else {
            TlsRole::Server
        })
        .allow_renegotiation(true)
        .build();
    let mut ctx = ConnectionContext::new(config);
    let role = ctx.config().role;

    for &op in data.iter().skip(1) {
        let slot = SecretSlot::ALL[(op >> 4) as usize % SecretSlot::ALL.len()];
        match op & 0x0F {
            0..=5 => {
                if let Ok(mut w) = ctx.handshake() {
                    let _ = w.set_secret(slot, Box::new(SecretBytes::new(vec![op; 32])));
                }
            }
            6 => {
                if let Ok(mut w) = ctx.handshake() {
                    let _ = w.clear_secret(slot);
                }
            }
            7 => {
                if let Ok(mut w) = ctx.handshake() {
                    let _ = w.set_entity(role.peer());
                }
            }
            8 => {
                let _ = ctx.complete_handshake();
            }
            9 => {
                let _ = ctx.begin_renegotiation();
            }
            10 => {
                let _ = ctx.close();
                assert!(ctx.security_parameters().secrets_cleared());
                assert_eq!(ctx.security_parameters().state(), RecordState::Cleared);
            }
            11 => {
                if let Ok(mut w) = ctx.handshake() {
                    let _ = w.set_renegotiating((op >> 4) & 1 == 1);
                }
            }
            _ => {
                let _ = ctx.connection_info();
            }
        }
        let params = ctx.security_parameters();
        if params.state() == RecordState::Renegotiating {
            assert!(params.is_renegotiating());
        }
        if let Some(entity) = params.entity() {
            assert_eq!(entity, role);
        }
        for slot in SecretSlot::ALL {
            if let Some(secret) = params.secret(slot) {
                assert!(!secret.is_destroyed());
            }
        }
    }
});
