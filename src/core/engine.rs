use crate::domain::model::User;
use crate::domain::ports::{ConfigProvider, Model, OutputSink, PayloadSource};
use crate::utils::error::{IntakeError, Result};
use serde_json::Value;

pub struct IntakeEngine<S: PayloadSource, K: OutputSink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
}

impl<S: PayloadSource, K: OutputSink, C: ConfigProvider> IntakeEngine<S, K, C> {
    pub fn new(source: S, sink: K, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }

    /// 讀取、驗證、輸出；任何一步失敗都不會寫出結果
    pub fn run(&self) -> Result<User> {
        tracing::info!("📥 Reading payload from {}", self.source.describe());
        let raw = self.source.read_payload()?;
        tracing::debug!("Read {} bytes", raw.len());

        let payload: Value = serde_json::from_str(&raw).map_err(IntakeError::PayloadError)?;

        tracing::debug!("Validating payload as {}", User::TITLE);
        let user = match User::model_validate(&payload) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("❌ Payload rejected with {} error(s)", e.error_count());
                for error in e.errors() {
                    tracing::debug!("{}: {} [{}]", error.location(), error.message, error.code);
                }
                return Err(e.into());
            }
        };
        tracing::info!("✅ Validated user '{}'", user.full_name());

        let rendered = self.render(&user)?;
        self.sink.write_output(&rendered)?;
        tracing::info!("📁 Output written to {}", self.sink.describe());

        Ok(user)
    }

    pub fn render(&self, user: &User) -> Result<String> {
        let dumped = user.model_dump(self.config.by_alias())?;
        let rendered = if self.config.pretty() {
            serde_json::to_string_pretty(&dumped)
        } else {
            serde_json::to_string(&dumped)
        };
        rendered.map_err(IntakeError::SerializationError)
    }
}
