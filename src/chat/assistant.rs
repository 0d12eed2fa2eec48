//! Keyword-dispatched career advice responses
//!
//! The knowledge base is an ordered list of (keywords, response) pairs
//! evaluated top to bottom; the first group with any keyword contained in the
//! lowercased input wins. No match falls through to a capability summary.

struct KnowledgeEntry {
    keywords: &'static [&'static str],
    response: &'static str,
}

pub struct CareerAssistant {
    entries: Vec<KnowledgeEntry>,
}

impl Default for CareerAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl CareerAssistant {
    pub fn new() -> Self {
        Self {
            entries: Self::knowledge_base(),
        }
    }

    /// Respond to a user message. First matching keyword group wins.
    pub fn respond(&self, input: &str) -> &'static str {
        let lower_input = input.to_lowercase();

        self.entries
            .iter()
            .find(|entry| entry.keywords.iter().any(|kw| lower_input.contains(kw)))
            .map(|entry| entry.response)
            .unwrap_or(FALLBACK_RESPONSE)
    }

    pub fn greeting(&self) -> &'static str {
        "Hi! I'm your career assistant.\nAsk me about improving your resume or learning new skills!"
    }

    fn knowledge_base() -> Vec<KnowledgeEntry> {
        vec![
            KnowledgeEntry {
                keywords: &["resume", "improve", "better", "optimize", "ats"],
                response: "Here are key tips to improve your resume:\n\n\
                    1. Use action verbs and quantify achievements\n\
                    2. Tailor your resume to each job description\n\
                    3. Include relevant keywords from the job posting\n\
                    4. Keep formatting clean and ATS-friendly\n\
                    5. Highlight measurable results and impact\n\n\
                    Would you like specific advice on any of these areas?",
            },
            KnowledgeEntry {
                keywords: &["skill", "learn", "course", "training", "study"],
                response: "Great question about learning new skills! Here's my recommendation:\n\n\
                    1. Start with high-priority skills from your gap analysis\n\
                    2. Use a mix of resources: online courses, documentation, hands-on projects\n\
                    3. Build portfolio projects to demonstrate proficiency\n\
                    4. Consider certifications for in-demand skills\n\
                    5. Practice consistently - even 30 minutes daily helps\n\n\
                    What specific skill are you most interested in learning?",
            },
            KnowledgeEntry {
                keywords: &["python", "javascript", "java", "programming", "coding"],
                response: "Programming skills are highly valued! Here's how to learn effectively:\n\n\
                    1. Start with fundamentals: syntax, data structures, algorithms\n\
                    2. Practice on platforms like LeetCode, HackerRank, or CodeWars\n\
                    3. Build real projects that solve actual problems\n\
                    4. Read and contribute to open-source code\n\
                    5. Join coding communities for support\n\n\
                    Recommended resources:\n\
                    - freeCodeCamp (free)\n\
                    - Codecademy\n\
                    - The Odin Project\n\
                    - Official documentation",
            },
            KnowledgeEntry {
                keywords: &["interview", "preparation", "job search", "apply"],
                response: "Interview preparation tips:\n\n\
                    1. Research the company thoroughly\n\
                    2. Practice common technical and behavioral questions\n\
                    3. Prepare STAR method responses for behavioral questions\n\
                    4. Have questions ready to ask the interviewer\n\
                    5. Do mock interviews with friends or online platforms\n\n\
                    For job searching:\n\
                    - Customize each application\n\
                    - Network on LinkedIn\n\
                    - Apply early in the posting cycle\n\
                    - Follow up professionally",
            },
            KnowledgeEntry {
                keywords: &["experience", "entry level", "junior", "beginner"],
                response: "Breaking into the field without experience:\n\n\
                    1. Build a strong portfolio with 3-5 solid projects\n\
                    2. Contribute to open-source projects\n\
                    3. Do freelance work or internships\n\
                    4. Create a technical blog to showcase knowledge\n\
                    5. Network actively on LinkedIn and at events\n\
                    6. Consider bootcamps or mentorship programs\n\n\
                    Remember: Everyone starts somewhere. Focus on demonstrating your ability to learn and solve problems!",
            },
            KnowledgeEntry {
                keywords: &["salary", "negotiate", "compensation", "pay"],
                response: "Career and compensation advice:\n\n\
                    1. Research market rates on Glassdoor, Levels.fyi, or Payscale\n\
                    2. Know your worth based on skills and location\n\
                    3. Practice negotiation conversations\n\
                    4. Consider total compensation (benefits, equity, etc.)\n\
                    5. Be professional and data-driven in discussions\n\n\
                    Timing matters - negotiate after receiving an offer, not during interviews.",
            },
        ]
    }
}

const FALLBACK_RESPONSE: &str = "Thanks for your question! I can help you with:\n\n\
    - Resume improvement and optimization\n\
    - Learning new skills and courses\n\
    - Programming and technical skills\n\
    - Interview preparation\n\
    - Career advice for beginners\n\
    - Salary and compensation guidance\n\n\
    What would you like to know more about?";
