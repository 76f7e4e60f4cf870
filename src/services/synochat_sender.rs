use reqwest::{Client, Url};
use serde_json::json;

use crate::config::constants::{request_timeout, MESSAGE_HEADER, SEND_TIMEOUT_SECS, SNIPPET_MAX_CHARS};
use crate::helpers::text_helper::truncate_chars;
use crate::structs::send_result::SendResult;

/// Posts messages straight to a Synology Chat incoming webhook.
pub struct SynochatSender;

impl SynochatSender {

    /// Header line followed by one bullet per updated feed.
    pub fn build_text(feeds: &[String]) -> String {
        let mut text = MESSAGE_HEADER.to_string();
        for feed in feeds {
            text.push_str("\n• ");
            text.push_str(feed);
        }
        text
    }

    /// Hides the query string, which carries the webhook token.
    pub fn mask_url(url: &str) -> String {
        let Ok(parsed) = Url::parse(url) else {
            return "***invalid url***".to_string();
        };

        let mut masked = format!("{}://{}", parsed.scheme(), parsed.host_str().unwrap_or_default());
        if let Some(port) = parsed.port() {
            masked.push_str(&format!(":{}", port));
        }
        masked.push_str(parsed.path());

        if parsed.query().is_some() {
            masked.push_str("?***masked***");
        }
        masked
    }

    pub async fn send(text: &str, url: &str, verify_ssl: bool) -> SendResult {
        let masked_url = Self::mask_url(url);
        log::info!("Sending message to Synology Chat: {}", masked_url);

        let client = match Client::builder()
            .timeout(request_timeout(SEND_TIMEOUT_SECS))
            .danger_accept_invalid_certs(!verify_ssl)
            .build()
        {
            Ok(client) => client,
            Err(e) => return Self::failure(&format!("Synology Chat request failed: {}", e)),
        };

        let payload = json!({ "text": text }).to_string();
        let response = client
            .post(url)
            .form(&[("payload", payload)])
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Self::failure("Synology Chat request timeout"),
            Err(e) => return Self::failure(&format!("Synology Chat request failed: {}", e)),
        };

        let status_code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let result = SendResult {
            status_code,
            snippet: truncate_chars(&body, SNIPPET_MAX_CHARS),
        };

        if result.is_success() {
            log::info!("Synology Chat message sent successfully: {}", status_code);
        } else {
            log::error!("Synology Chat message failed: {} - {}", status_code, result.snippet);
        }

        result
    }

    fn failure(message: &str) -> SendResult {
        log::error!("{}", message);
        SendResult {
            status_code: 0,
            snippet: truncate_chars(message, SNIPPET_MAX_CHARS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_text_lists_feeds() {
        let feeds = vec!["公众号A".to_string(), "公众号B".to_string()];
        assert_eq!(SynochatSender::build_text(&feeds), "**WeRSS 更新公众号**\n• 公众号A\n• 公众号B");
    }

    #[test]
    fn build_text_without_feeds_is_just_the_header() {
        assert_eq!(SynochatSender::build_text(&[]), "**WeRSS 更新公众号**");
    }

    #[test]
    fn mask_url_hides_token() {
        let masked = SynochatSender::mask_url(
            "https://nas.example.com:5001/webapi/entry.cgi?api=SYNO.Chat.External&method=incoming&token=%22abc%22",
        );
        assert_eq!(masked, "https://nas.example.com:5001/webapi/entry.cgi?***masked***");
    }

    #[test]
    fn mask_url_without_query_is_unchanged() {
        assert_eq!(SynochatSender::mask_url("https://nas.example.com/hook"), "https://nas.example.com/hook");
    }

    #[test]
    fn mask_url_rejects_garbage() {
        assert_eq!(SynochatSender::mask_url("not a url"), "***invalid url***");
    }
}
