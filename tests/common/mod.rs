//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use vultr_dns_provider::{DnsProvider, Record, RecordData, VultrProvider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 生成 SRV 记录专用的测试服务名
pub fn generate_srv_test_service() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}", &uuid.to_string()[..8])
}

/// 支持测试的记录类型
#[derive(Debug, Clone, Copy)]
pub enum TestRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Srv,
    Caa,
}

/// 获取测试记录数据（创建和更新）
pub fn get_test_record_data(record_type: TestRecordType) -> (RecordData, RecordData) {
    match record_type {
        TestRecordType::A => (
            RecordData::A {
                address: "192.0.2.1".parse().expect("valid IPv4"),
            },
            RecordData::A {
                address: "192.0.2.2".parse().expect("valid IPv4"),
            },
        ),
        TestRecordType::Aaaa => (
            RecordData::AAAA {
                address: "2001:db8::1".parse().expect("valid IPv6"),
            },
            RecordData::AAAA {
                address: "2001:db8::2".parse().expect("valid IPv6"),
            },
        ),
        TestRecordType::Cname => (
            RecordData::CNAME {
                target: "target1.example.com".to_string(),
            },
            RecordData::CNAME {
                target: "target2.example.com".to_string(),
            },
        ),
        TestRecordType::Mx => (
            RecordData::MX {
                preference: 10,
                exchange: "mail1.example.com".to_string(),
            },
            RecordData::MX {
                preference: 20,
                exchange: "mail2.example.com".to_string(),
            },
        ),
        TestRecordType::Txt => (
            RecordData::TXT {
                text: "test-value-1".to_string(),
            },
            RecordData::TXT {
                text: "test-value-2".to_string(),
            },
        ),
        TestRecordType::Srv => (
            RecordData::SRV {
                service: "testsvc".to_string(),
                transport: "tcp".to_string(),
                priority: 0,
                weight: 5,
                port: 443,
                target: "srv1.example.com".to_string(),
            },
            RecordData::SRV {
                service: "testsvc".to_string(),
                transport: "tcp".to_string(),
                priority: 10,
                weight: 10,
                port: 8443,
                target: "srv2.example.com".to_string(),
            },
        ),
        TestRecordType::Caa => (
            RecordData::CAA {
                flags: 0,
                tag: "issue".to_string(),
                value: "letsencrypt.org".to_string(),
            },
            RecordData::CAA {
                flags: 0,
                tag: "issue".to_string(),
                value: "digicert.com".to_string(),
            },
        ),
    }
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub zone: String,
}

impl TestContext {
    /// 创建 Vultr 测试上下文
    pub fn vultr() -> Option<Self> {
        let api_token = env::var("VULTR_API_TOKEN").ok()?;
        let zone = env::var("TEST_ZONE").ok()?;

        Some(Self {
            provider: Arc::new(VultrProvider::new(api_token)),
            zone,
        })
    }

    /// 创建一条测试记录并返回（带 ID）
    pub async fn create_test_record(&self) -> Option<Record> {
        let record = Record {
            id: None,
            name: generate_test_record_name(),
            ttl: 600,
            data: RecordData::TXT {
                text: "integration-test".to_string(),
            },
        };

        self.provider
            .append_records(&self.zone, &[record])
            .await
            .ok()?
            .into_iter()
            .next()
    }

    /// 清理测试记录
    pub async fn cleanup_record(&self, record: &Record) {
        let _ = self.provider.delete_records(&self.zone, &[record.clone()]).await;
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        if let Ok(records) = self.provider.list_records(&self.zone).await {
            let leftovers: Vec<Record> = records
                .into_iter()
                .filter(|r| r.name.starts_with("_test-"))
                .collect();
            if !leftovers.is_empty() {
                let _ = self.provider.delete_records(&self.zone, &leftovers).await;
            }
        }
    }
}
