use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A phishing-or-legitimate email used in the simulation. `is_phishing` is
/// the single canonical ground truth; generated scenarios are normalized to
/// it at the parse boundary.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailScenario {
    pub id: u32,
    pub from: String,
    pub subject: String,
    pub body: String,
    pub is_phishing: bool,
    pub red_flags: Vec<String>,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlScenario {
    pub id: u32,
    pub url: String,
    pub display_text: String,
    pub is_phishing: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPageScenario {
    pub id: u32,
    pub site_name: String,
    pub url: String,
    pub uses_https: bool,
    pub has_suspicious_domain: bool,
    pub is_phishing: bool,
    pub explanation: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub static EMAIL_SCENARIOS: Lazy<Vec<EmailScenario>> = Lazy::new(|| {
    vec![
        EmailScenario {
            id: 1,
            from: "security@paypa1-support.com".to_string(),
            subject: "URGENT: Your Account Has Been Locked".to_string(),
            body: "Dear Valued Customer,\n\nYour PayPal account has been locked due to suspicious activity. To unlock your account immediately, please click the link below and verify your information within 24 hours or your account will be permanently deleted.\n\nClick here to verify: http://paypa1-verify.com/login\n\nThank you,\nPayPal Security Team".to_string(),
            is_phishing: true,
            red_flags: strings(&[
                "Sender domain 'paypa1-support.com' uses number '1' instead of letter 'l'",
                "Creates urgency with threats of account deletion",
                "Generic greeting 'Dear Valued Customer' instead of your name",
                "Suspicious URL with HTTP instead of HTTPS",
                "Domain 'paypa1-verify.com' is not official PayPal domain",
            ]),
            explanation: "This is a classic phishing email. Legitimate companies don't threaten to delete accounts, use generic greetings, or send suspicious links. Always verify by going directly to the company's official website.".to_string(),
        },
        EmailScenario {
            id: 2,
            from: "it-support@yourcompany.com".to_string(),
            subject: "Password Reset Required".to_string(),
            body: "Hello John Smith,\n\nAs part of our routine security update, we need you to reset your password. Please use the link below to access the secure password reset portal:\n\nhttps://yourcompany.com/reset-password\n\nIf you have any questions, please contact IT Support at extension 4521.\n\nBest regards,\nIT Support Team\nYour Company Inc.".to_string(),
            is_phishing: false,
            red_flags: Vec::new(),
            explanation: "This appears to be a legitimate email. It uses your actual name, comes from the company domain, links to the official company website with HTTPS, provides contact information, and doesn't create false urgency.".to_string(),
        },
        EmailScenario {
            id: 3,
            from: "no-reply@amazon-security.xyz".to_string(),
            subject: "Confirm Your Recent Order #8729-4561".to_string(),
            body: "Dear Customer,\n\nWe noticed an order for $899.99 was placed on your account. If you did not make this purchase, please click below to cancel:\n\nhttp://amzn-secure-cancel.xyz/order/cancel?id=8729\n\nOrder Details:\n- iPhone 14 Pro Max\n- Quantity: 1\n- Total: $899.99\n\nAmazon Customer Service".to_string(),
            is_phishing: true,
            red_flags: strings(&[
                "Domain '.xyz' is suspicious for Amazon",
                "Creates urgency with fake high-value order",
                "Generic greeting without your actual name",
                "URL uses HTTP instead of HTTPS",
                "Suspicious domain 'amzn-secure-cancel.xyz' is not amazon.com",
            ]),
            explanation: "This phishing email uses fear tactics about a fake purchase to get you to click. Amazon uses amazon.com domain, HTTPS links, and doesn't use '.xyz' domains. Always check orders by logging into the official website directly.".to_string(),
        },
    ]
});

pub static URL_SCENARIOS: Lazy<Vec<UrlScenario>> = Lazy::new(|| {
    vec![
        UrlScenario {
            id: 1,
            url: "http://g00gle.com/signin".to_string(),
            display_text: "Google Sign In".to_string(),
            is_phishing: true,
            explanation: "This URL uses '00' (zeros) instead of 'oo' in 'google'. This is called typosquatting. The legitimate Google domain is 'google.com' with the letter 'o', not the number '0'.".to_string(),
        },
        UrlScenario {
            id: 2,
            url: "https://login.microsoft.com/oauth2/authorize".to_string(),
            display_text: "Microsoft Login".to_string(),
            is_phishing: false,
            explanation: "This is a legitimate Microsoft URL. It uses HTTPS, the correct domain 'microsoft.com', and a standard OAuth path. Always verify the exact domain spelling.".to_string(),
        },
        UrlScenario {
            id: 3,
            url: "https://secure-netflix-billing.com/update-payment".to_string(),
            display_text: "Update Netflix Payment".to_string(),
            is_phishing: true,
            explanation: "While this uses HTTPS, the domain 'secure-netflix-billing.com' is NOT the official Netflix domain. The real Netflix uses 'netflix.com'. Attackers can get HTTPS certificates for phishing sites too.".to_string(),
        },
    ]
});

pub static LOGIN_PAGE_SCENARIOS: Lazy<Vec<LoginPageScenario>> = Lazy::new(|| {
    vec![
        LoginPageScenario {
            id: 1,
            site_name: "PayPal".to_string(),
            url: "http://paypal-secure.support.com".to_string(),
            uses_https: false,
            has_suspicious_domain: true,
            is_phishing: true,
            explanation: "This is a phishing site. It lacks HTTPS encryption and uses a fake domain 'paypal-secure.support.com'. The real PayPal is at 'paypal.com' and always uses HTTPS.".to_string(),
        },
        LoginPageScenario {
            id: 2,
            site_name: "Facebook".to_string(),
            url: "https://facebook.com/login".to_string(),
            uses_https: true,
            has_suspicious_domain: false,
            is_phishing: false,
            explanation: "This is legitimate. It uses HTTPS, the correct domain 'facebook.com', and has no suspicious elements. Always verify these security indicators before logging in.".to_string(),
        },
        LoginPageScenario {
            id: 3,
            site_name: "Apple ID".to_string(),
            url: "https://appleid.apple.com.verify-account.net".to_string(),
            uses_https: true,
            has_suspicious_domain: true,
            is_phishing: true,
            explanation: "Despite having HTTPS, this is a phishing site. The actual domain is 'verify-account.net', NOT 'apple.com'. The real Apple ID site is 'appleid.apple.com'. Attackers place legitimate-looking text before their fake domain.".to_string(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banks_hold_three_scenarios_each() {
        assert_eq!(EMAIL_SCENARIOS.len(), 3);
        assert_eq!(URL_SCENARIOS.len(), 3);
        assert_eq!(LOGIN_PAGE_SCENARIOS.len(), 3);
    }

    #[test]
    fn legitimate_email_carries_no_red_flags() {
        let legit = EMAIL_SCENARIOS
            .iter()
            .find(|s| !s.is_phishing)
            .expect("bank should contain a legitimate email");
        assert!(legit.red_flags.is_empty());
    }

    #[test]
    fn login_scenario_serializes_with_camel_case_wire_names() {
        let json =
            serde_json::to_value(&LOGIN_PAGE_SCENARIOS[0]).expect("scenario should serialize");

        assert!(json.get("siteName").is_some());
        assert!(json.get("usesHttps").is_some());
        assert!(json.get("hasSuspiciousDomain").is_some());
        assert_eq!(json.get("isPhishing"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn https_alone_does_not_imply_legitimate() {
        // The Apple ID scenario is the counterexample the training leans on.
        let apple = &LOGIN_PAGE_SCENARIOS[2];
        assert!(apple.uses_https);
        assert!(apple.is_phishing);
    }
}
