//! JSON client configuration export
//!
//! Two shapes are produced from the same parameters: a single VLESS
//! outbound (what v2rayN / v2rayNG import) and a complete Xray client
//! config wrapping that outbound together with a local SOCKS inbound.
//!
//! The outbound user record always carries `encryption: "none"` and
//! `flow: "xtls-rprx-vision"` regardless of the flow placed in the link
//! query; client cores expect exactly these literals here.

use serde::Serialize;

use crate::models::ConnectionParams;

/// Local SOCKS port the full client config listens on by default.
pub const DEFAULT_SOCKS_PORT: u16 = 10808;

const OUTBOUND_ENCRYPTION: &str = "none";
const OUTBOUND_FLOW: &str = "xtls-rprx-vision";

#[derive(Debug, Serialize)]
pub struct VlessOutbound {
    pub protocol: &'static str,
    pub settings: OutboundSettings,
    #[serde(rename = "streamSettings")]
    pub stream_settings: StreamSettings,
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct OutboundSettings {
    pub vnext: Vec<VnextServer>,
}

#[derive(Debug, Serialize)]
pub struct VnextServer {
    pub address: String,
    pub port: u16,
    pub users: Vec<VnextUser>,
}

#[derive(Debug, Serialize)]
pub struct VnextUser {
    pub id: String,
    pub encryption: &'static str,
    pub flow: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StreamSettings {
    pub network: &'static str,
    pub security: &'static str,
    #[serde(rename = "realitySettings")]
    pub reality_settings: RealitySettings,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealitySettings {
    pub fingerprint: String,
    pub server_name: String,
    pub public_key: String,
    pub short_id: String,
}

/// Full Xray client configuration: warning-level log, one local SOCKS
/// inbound with sniffing, one VLESS REALITY outbound tagged "proxy".
#[derive(Debug, Serialize)]
pub struct ClientConfig {
    pub log: LogSettings,
    pub inbounds: Vec<SocksInbound>,
    pub outbounds: Vec<VlessOutbound>,
}

#[derive(Debug, Serialize)]
pub struct LogSettings {
    pub loglevel: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SocksInbound {
    pub listen: &'static str,
    pub port: u16,
    pub protocol: &'static str,
    pub settings: SocksSettings,
    pub sniffing: Sniffing,
}

#[derive(Debug, Serialize)]
pub struct SocksSettings {
    pub udp: bool,
}

#[derive(Debug, Serialize)]
pub struct Sniffing {
    pub enabled: bool,
    #[serde(rename = "destOverride")]
    pub dest_override: Vec<&'static str>,
}

fn vless_outbound(params: &ConnectionParams, tag: String) -> VlessOutbound {
    VlessOutbound {
        protocol: "vless",
        settings: OutboundSettings {
            vnext: vec![VnextServer {
                address: params.host.clone(),
                port: params.port,
                users: vec![VnextUser {
                    id: params.uuid.to_string(),
                    encryption: OUTBOUND_ENCRYPTION,
                    flow: OUTBOUND_FLOW,
                }],
            }],
        },
        stream_settings: StreamSettings {
            network: "tcp",
            security: "reality",
            reality_settings: RealitySettings {
                fingerprint: params.fingerprint.to_string(),
                server_name: params.server_name.clone(),
                public_key: params.public_key.clone(),
                short_id: params.short_id.clone(),
            },
        },
        tag,
    }
}

/// Export a single outbound in the v2rayN / v2rayNG format.
pub fn single_outbound(params: &ConnectionParams) -> VlessOutbound {
    vless_outbound(params, params.tag.clone())
}

/// Export a complete client configuration (SOCKS inbound + VLESS REALITY
/// outbound).
pub fn full_client_config(params: &ConnectionParams, socks_port: u16) -> ClientConfig {
    ClientConfig {
        log: LogSettings {
            loglevel: "warning",
        },
        inbounds: vec![SocksInbound {
            listen: "127.0.0.1",
            port: socks_port,
            protocol: "socks",
            settings: SocksSettings { udp: true },
            sniffing: Sniffing {
                enabled: true,
                dest_override: vec!["http", "tls", "quic"],
            },
        }],
        outbounds: vec![vless_outbound(params, "proxy".to_string())],
    }
}
