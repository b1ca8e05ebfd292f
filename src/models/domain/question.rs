use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A multiple-choice training question. Instances are either compiled in
/// (the static banks below) or parsed out of a generated quiz payload;
/// they are never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn new(
        id: u32,
        question: &str,
        options: [&str; 4],
        correct_answer: usize,
        explanation: &str,
    ) -> Self {
        Self {
            id,
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
            explanation: explanation.to_string(),
        }
    }
}

/// Static password-security question bank.
pub static PASSWORD_QUESTIONS: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    vec![
        QuizQuestion::new(
            1,
            "What is the minimum recommended length for a strong password?",
            ["6 characters", "8 characters", "12 characters", "20 characters"],
            2,
            "Security experts recommend passwords of at least 12-16 characters. Longer passwords are exponentially harder to crack through brute force attacks.",
        ),
        QuizQuestion::new(
            2,
            "Which of the following is the STRONGEST password?",
            ["password123", "JohnDoe1990", "Tr0ub4dor&3", "correct-horse-battery-staple"],
            3,
            "The passphrase 'correct-horse-battery-staple' is strongest because it's long, unpredictable, and doesn't follow common patterns. Length and randomness are more important than complexity.",
        ),
        QuizQuestion::new(
            3,
            "What is the main risk of reusing the same password across multiple accounts?",
            [
                "It's harder to remember",
                "If one account is breached, all accounts are at risk",
                "It violates terms of service",
                "Passwords expire faster",
            ],
            1,
            "If one service is compromised and your password is leaked, attackers will try that password on other popular services. Using unique passwords for each account contains the damage to just one account.",
        ),
        QuizQuestion::new(
            4,
            "Which tool is MOST recommended for managing multiple complex passwords?",
            [
                "Writing them in a notebook",
                "Saving them in a text file on your computer",
                "Using a reputable password manager",
                "Using the same password with slight variations",
            ],
            2,
            "Password managers securely encrypt and store your passwords, generate strong random passwords, and autofill credentials. They're much more secure than writing passwords down or reusing them.",
        ),
        QuizQuestion::new(
            5,
            "What does two-factor authentication (2FA) add to password security?",
            [
                "It makes passwords longer",
                "It requires a second form of verification beyond the password",
                "It changes your password automatically",
                "It encrypts your password",
            ],
            1,
            "2FA adds an extra layer of security by requiring something you have (like a phone) or something you are (like a fingerprint) in addition to something you know (your password).",
        ),
        QuizQuestion::new(
            6,
            "Which of these should you AVOID when creating a password?",
            [
                "Using special characters",
                "Making it longer than 12 characters",
                "Including your name or birthdate",
                "Using a mix of uppercase and lowercase",
            ],
            2,
            "Personal information like names, birthdates, addresses, or pet names should be avoided because attackers can often find this information through social media or public records.",
        ),
        QuizQuestion::new(
            7,
            "How often should you change a password that hasn't been compromised?",
            [
                "Every week",
                "Every month",
                "Only when there's evidence of a breach",
                "Never",
            ],
            2,
            "Modern security guidance suggests changing passwords only when necessary (like after a breach). Frequent mandatory changes often lead to weaker passwords and poor practices like incremental changes.",
        ),
        QuizQuestion::new(
            8,
            "What makes a password 'unpredictable'?",
            [
                "Using all capital letters",
                "Avoiding common words, patterns, and personal information",
                "Using only numbers",
                "Making it exactly 8 characters long",
            ],
            1,
            "Unpredictability comes from avoiding patterns that attackers expect: dictionary words, keyboard patterns, common substitutions (like '@' for 'a'), and personal information.",
        ),
        QuizQuestion::new(
            9,
            "Which type of attack tries all possible password combinations until finding the correct one?",
            [
                "Phishing attack",
                "Brute force attack",
                "Social engineering",
                "Man-in-the-middle attack",
            ],
            1,
            "A brute force attack systematically tries every possible combination of characters until the correct password is found. Longer, more complex passwords exponentially increase the time required for such attacks.",
        ),
        QuizQuestion::new(
            10,
            "What is the BEST way to secure accounts that store sensitive information?",
            [
                "Use the same strong password across all accounts",
                "Use a unique strong password AND enable multi-factor authentication",
                "Change your password every week",
                "Use a short password but change it frequently",
            ],
            1,
            "The strongest security comes from combining a unique, strong password with multi-factor authentication (2FA/MFA). This layered approach ensures that even if your password is compromised, attackers still cannot access your account.",
        ),
    ]
});

/// Static phishing-awareness question bank.
pub static PHISHING_QUESTIONS: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    vec![
        QuizQuestion::new(
            1,
            "What is phishing?",
            [
                "A type of computer virus",
                "A cyberattack that tricks people into revealing sensitive information",
                "A method of encrypting data",
                "A firewall configuration",
            ],
            1,
            "Phishing is a cyberattack where criminals impersonate trusted entities to deceive victims into sharing passwords, credit card numbers, or other sensitive data.",
        ),
        QuizQuestion::new(
            2,
            "Which of the following is a common sign of a phishing email?",
            [
                "A personalized greeting with your full name",
                "A message from a known coworker",
                "Urgent or threatening language demanding immediate action",
                "Proper spelling and grammar throughout",
            ],
            2,
            "Phishing emails often use urgent or threatening language to create panic and pressure victims into acting without thinking critically. This is a major red flag.",
        ),
        QuizQuestion::new(
            3,
            "You receive an email from 'support@paypa1.com' asking you to verify your account. What should you do?",
            [
                "Click the link and enter your credentials",
                "Reply with your account details",
                "Notice the misspelled domain and report it as phishing",
                "Forward it to your friends to warn them",
            ],
            2,
            "The misspelled domain ('paypa1' with a number 1 instead of the letter 'l') is a classic phishing technique. Never click links in suspicious emails. Go directly to the official website by typing the URL yourself.",
        ),
        QuizQuestion::new(
            4,
            "Which type of phishing specifically targets individuals or organizations with personalized attacks?",
            ["Mass phishing", "Spear phishing", "Vishing", "Pharming"],
            1,
            "Spear phishing involves targeted attacks where criminals research specific victims and craft personalized messages to appear more legitimate and increase success rates.",
        ),
        QuizQuestion::new(
            5,
            "What should you check before clicking a link in an email?",
            [
                "The color of the link",
                "The length of the email",
                "The actual URL by hovering over the link",
                "The time the email was sent",
            ],
            2,
            "Always hover over links (without clicking) to see the actual destination URL. Phishing emails often display legitimate-looking text but link to fraudulent websites.",
        ),
        QuizQuestion::new(
            6,
            "A text message claims your package is undeliverable and includes a link to update your address. What is this called?",
            ["Smishing", "Whaling", "Spear phishing", "Pharming"],
            0,
            "Smishing is phishing conducted through SMS text messages. These often impersonate delivery services, banks, or government agencies to trick victims into clicking malicious links.",
        ),
        QuizQuestion::new(
            7,
            "Why should you be suspicious of emails with generic greetings like 'Dear Customer'?",
            [
                "They are always spam",
                "They indicate the sender is lazy",
                "Legitimate companies usually personalize emails with your name",
                "Generic greetings are illegal",
            ],
            2,
            "While not definitive proof of phishing, generic greetings often indicate mass-sent fraudulent emails. Legitimate companies typically use your actual name from their customer database.",
        ),
        QuizQuestion::new(
            8,
            "What is the BEST action if you receive a suspicious email claiming to be from your bank?",
            [
                "Click the link to check if it's real",
                "Call the phone number provided in the email",
                "Contact your bank directly using official contact information",
                "Ignore it completely without reporting",
            ],
            2,
            "Never use contact information from suspicious emails. Instead, independently verify by contacting the organization through official channels you find yourself (website, phone book, official app).",
        ),
        QuizQuestion::new(
            9,
            "Which of these makes you LESS vulnerable to phishing attacks?",
            [
                "Using the same password everywhere",
                "Enabling two-factor authentication on your accounts",
                "Clicking links quickly before they expire",
                "Sharing your passwords with trusted friends",
            ],
            1,
            "Two-factor authentication adds an extra security layer. Even if phishing steals your password, attackers still can't access your account without the second factor (like a code sent to your phone).",
        ),
        QuizQuestion::new(
            10,
            "An email offers you a free iPhone if you click a link and enter your personal information. What is this likely to be?",
            [
                "A legitimate promotion",
                "A customer loyalty reward",
                "A phishing scam using bait",
                "A marketing survey",
            ],
            2,
            "If an offer seems too good to be true, it probably is. Free expensive items are classic phishing bait designed to entice victims into clicking malicious links or sharing personal information.",
        ),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banks_hold_ten_questions_each() {
        assert_eq!(PASSWORD_QUESTIONS.len(), 10);
        assert_eq!(PHISHING_QUESTIONS.len(), 10);
    }

    #[test]
    fn every_question_has_four_options_and_a_valid_answer_index() {
        for q in PASSWORD_QUESTIONS.iter().chain(PHISHING_QUESTIONS.iter()) {
            assert_eq!(q.options.len(), 4, "question {} option count", q.id);
            assert!(q.correct_answer < 4, "question {} answer index", q.id);
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn question_serializes_with_camel_case_wire_names() {
        let q = &PASSWORD_QUESTIONS[0];
        let json = serde_json::to_value(q).expect("question should serialize");

        assert!(json.get("correctAnswer").is_some());
        assert!(json.get("correct_answer").is_none());
    }
}
