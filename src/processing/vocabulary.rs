//! Fixed vocabularies: qualifications, skills and job titles
//!
//! All three tables are compiled once per process and shared read-only by
//! every extraction call.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Known degrees, diplomas, certifications and professional designations.
/// Alternation order matters: the regex engine takes the first alternative
/// that matches at a position.
const QUALIFICATION_TERMS: &[&str] = &[
    r"Bachelor", r"Master", r"Doctorate", r"PhD", r"Diploma", r"Associate", r"Certification",
    r"B\.?Tech", r"M\.?Tech", r"B\.?E", r"M\.?E", r"B\.?Sc", r"M\.?Sc", r"BCA", r"MCA", r"BBA",
    r"MBA", r"PGDM", r"PG Diploma",
    r"B\.?Com", r"M\.?Com", r"B\.?A", r"M\.?A", r"BFA", r"MFA", r"BMS",
    r"B\.?Pharm", r"M\.?Pharm", r"D\.?Pharm", r"Pharm\.?D",
    r"B\.?Ed", r"M\.?Ed", r"D\.?Ed",
    r"LLB", r"LLM", r"JD",
    r"CA", r"CPA", r"CS", r"ICWA", r"CFA", r"CMA", r"CFP", r"ACCA", r"CISA",
    r"BDS", r"MDS", r"MBBS", r"MD", r"MS", r"BHMS", r"BAMS", r"BUMS", r"BVSc", r"MVSc", r"BPT", r"MPT",
    r"B\.?Arch", r"M\.?Arch",
    r"GNIIT", r"NIIT Certification", r"CCNA", r"CCNP", r"CCIE", r"AWS Certified", r"Azure Certified",
    r"Google Cloud Certified", r"PMP", r"Six Sigma",
    r"SSLC", r"Plus Two", r"Higher Secondary", r"High School", r"Secondary School", r"Intermediate",
    r"10th", r"12th", r"HSC", r"SSC", r"IGCSE", r"GCSE", r"IB Diploma", r"A Levels", r"O Levels",
    r"Polytechnic", r"ITI", r"Vocational Diploma",
    r"RN", r"BSN", r"MSN", r"CNA",
    r"Chartered Engineer", r"Professional Engineer",
    r"Executive MBA", r"Online MBA",
    r"MPH", r"MHA",
    r"PG Certificate", r"Graduate Certificate", r"Advanced Diploma",
    r"Artificial Intelligence Certification", r"Data Science Certification",
    r"Digital Marketing Certification",
    r"Cybersecurity Certification", r"Blockchain Certification",
    r"Film Making Diploma", r"Photography Diploma", r"Animation Diploma",
    r"Fashion Designing", r"Interior Designing",
    r"Event Management Diploma", r"Hotel Management Diploma",
    r"Fire and Safety Diploma",
    r"Environment Management Certification",
    r"Automotive Engineering", r"Aerospace Engineering", r"Marine Engineering",
    r"Industrial Training", r"Technical Certification",
    r"Cloud Computing Diploma", r"Machine Learning Certification", r"AI Certification",
    r"Graphic Design Certification", r"UI/UX Certification", r"Web Development Certification",
    r"Full Stack Development Certification", r"DevOps Certification",
    r"Data Analytics Certification", r"Business Analytics Certification",
    r"Foreign Language Diploma", r"TEFL", r"TESOL",
    r"Food Technology Diploma", r"Agriculture Diploma",
    r"Journalism Diploma", r"Mass Communication Diploma",
    r"Supply Chain Management Certification", r"Logistics Certification",
    r"Entrepreneurship Certification",
    r"Public Relations Certification",
    r"Forex Certification", r"Investment Banking Certification", r"Stock Market Certification",
    r"Clinical Research Certification", r"Phlebotomy Certification",
    r"Legal Assistant Certification", r"Paralegal Certification",
    r"Occupational Therapy Certification", r"Speech Therapy Certification",
    r"Counseling Certification",
    r"Yoga Certification", r"Fitness Trainer Certification", r"Sports Management Diploma",
    r"Artificial Intelligence Diploma", r"Big Data Certification",
    r"Electrical Engineering", r"Civil Engineering", r"Mechanical Engineering",
    r"Biomedical Engineering", r"Biotechnology Engineering", r"Chemical Engineering",
    r"Nursing Diploma", r"Healthcare Management Diploma",
    r"Law Enforcement Diploma", r"Criminal Justice Diploma",
    r"Psychology Diploma", r"Sociology Diploma", r"Philosophy Diploma",
    r"Library Science Diploma",
    r"Statistics Certification", r"Mathematics Diploma",
    r"Tourism and Hospitality Diploma",
    r"Culinary Arts Diploma",
    r"Software Testing Certification", r"Penetration Testing Certification",
    r"Ethical Hacking Certification",
    r"UI/UX Design Diploma", r"Game Development Diploma",
    r"Sound Engineering Diploma", r"Music Production Diploma",
    r"Agribusiness Diploma",
    r"Nanotechnology Diploma", r"Geology Diploma",
    r"Actuarial Science Certification", r"Risk Management Certification",
    r"Child Development Certification", r"Social Work Diploma",
    r"Corporate Law Certification",
    r"Veterinary Science Diploma",
    r"Environmental Science Diploma",
    r"Renewable Energy Diploma", r"Solar Energy Certification", r"Wind Energy Certification",
    r"Construction Management Diploma", r"Real Estate Management Diploma",
    r"Aviation Management Diploma", r"Pilot Training Certification",
    r"Cabin Crew Training Certification",
    // Spelled-out bachelor degrees
    r"Bachelor of Arts", r"Bachelor of Science", r"Bachelor of Commerce",
    r"Bachelor of Business Administration", r"Bachelor of Computer Applications",
    r"Bachelor of Engineering", r"Bachelor of Technology", r"Bachelor of Architecture",
    r"Bachelor of Fine Arts",
    r"Bachelor of Pharmacy", r"Bachelor of Education", r"Bachelor of Laws",
    r"Bachelor of Dental Surgery",
    r"Bachelor of Medicine", r"Bachelor of Surgery", r"Bachelor of Physiotherapy",
    r"Bachelor of Occupational Therapy",
    r"Bachelor of Veterinary Science", r"Bachelor of Social Work",
    r"Bachelor of Hospitality Management",
    r"Bachelor of Hotel Management", r"Bachelor of Tourism and Travel Management",
    r"Bachelor of Journalism and Mass Communication", r"Bachelor of Performing Arts",
    r"Bachelor of Visual Arts",
    r"Bachelor of Ayurvedic Medicine and Surgery", r"Bachelor of Homeopathic Medicine and Surgery",
    r"Bachelor of Unani Medicine and Surgery", r"Bachelor of Business Studies",
    r"Bachelor of Management Studies",
    r"Bachelor of International Business", r"Bachelor of Financial Services",
    r"Bachelor of Computer Science", r"Bachelor of Information Technology",
    r"Bachelor of Data Science",
    r"Bachelor of Cybersecurity", r"Bachelor of Cloud Computing",
    r"Bachelor of Artificial Intelligence",
    r"Bachelor of Machine Learning", r"Bachelor of Digital Marketing",
    r"Bachelor of Event Management",
    r"Bachelor of Fashion Design", r"Bachelor of Interior Design", r"Bachelor of Product Design",
    r"Bachelor of Animation", r"Bachelor of Multimedia", r"Bachelor of Film Making",
    r"Bachelor of Sports Management", r"Bachelor of Physical Education",
    r"Bachelor of Fitness Management",
    r"Bachelor of Agriculture", r"Bachelor of Forestry", r"Bachelor of Fisheries Science",
    r"Bachelor of Biotechnology", r"Bachelor of Environmental Science",
    r"Bachelor of Industrial Design", r"Bachelor of Marine Engineering",
    r"Bachelor of Naval Architecture",
    r"Bachelor of Aviation", r"Bachelor of Aircraft Maintenance Engineering",
    r"Bachelor of Economics", r"Bachelor of Statistics", r"Bachelor of Mathematics",
    r"Bachelor of Political Science", r"Bachelor of Philosophy", r"Bachelor of Sociology",
    r"Bachelor of Psychology",
    r"Bachelor of Anthropology", r"Bachelor of History", r"Bachelor of Public Administration",
    r"Bachelor of Criminology", r"Bachelor of Forensic Science",
];

/// Skill dictionary, reported in this order with this spelling
pub const SKILL_TERMS: &[&str] = &[
    // Programming languages
    "Python", "Java", "Flutter", "SQL", "Django", "FastAPI", "JavaScript", "TypeScript",
    "C#", "C++", "Go", "Rust", "Ruby", "Kotlin", "Swift", "PHP", "R", "Perl",
    // Databases and backend
    "MongoDB", "MySQL", "PostgreSQL", "SQLite", "Redis", "GraphQL", "Firebase", "OracleDB",
    // Web development
    "HTML", "CSS", "React", "Vue.js", "Angular", "Node.js", "Next.js", "Nuxt.js",
    "Express.js", "Svelte", "ASP.NET", "Laravel", "Spring Boot",
    // Mobile development
    "React Native", "SwiftUI", "Jetpack Compose", "Ionic", "Xamarin",
    // Cloud and DevOps
    "AWS", "Azure", "Google Cloud", "Kubernetes", "Docker", "Terraform", "Jenkins",
    "Ansible", "GitHub Actions", "CI/CD", "Linux Administration",
    // Data science and machine learning
    "Pandas", "NumPy", "Scikit-learn", "TensorFlow", "PyTorch", "Keras",
    "Matplotlib", "Seaborn", "Hugging Face", "NLP", "Computer Vision",
    // Cybersecurity
    "Penetration Testing", "Ethical Hacking", "Network Security", "Cloud Security",
    "Cryptography", "SOC Analysis",
    // Business and soft skills
    "Recruitment", "Payroll", "Employee Relations", "Compliance Management",
    "SEO", "Digital Marketing", "Social Media", "Content Marketing",
    "Communication", "Leadership", "Problem Solving", "Team Management",
    // Marketing and design
    "Adobe Photoshop", "Adobe Illustrator", "Canva", "UI/UX Design",
    "Wireframing", "Figma", "Sketch",
    // Other
    "Agile Methodologies", "Scrum", "Project Management", "Business Analysis",
    "Customer Relationship Management (CRM)", "Blockchain", "IoT",
];

/// Job titles; these are matched anywhere, without word boundaries
const JOB_TITLE_TERMS: &[&str] = &[
    "Software Engineer", "Data Scientist", "Machine Learning Engineer", "Project Manager",
    "DevOps Engineer", "Web Developer", "Frontend Developer", "Backend Developer",
    "Full Stack Developer", "Business Analyst", "Product Manager", "System Administrator",
    "Network Engineer", "Cyber Security Analyst", "AI Engineer", "Cloud Engineer",
    "Technical Lead", "Software Architect", "QA Engineer", "Data Analyst", "Supervisor",
];

static VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::build);

/// Process-wide compiled vocabulary
pub fn vocabulary() -> &'static Vocabulary {
    &VOCABULARY
}

/// Compiled matchers for the three fixed vocabularies
pub struct Vocabulary {
    qualification_pattern: Regex,
    skill_matcher: AhoCorasick,
    job_title_pattern: Regex,
}

impl Vocabulary {
    fn build() -> Self {
        let qualification_pattern =
            Regex::new(&format!(r"(?i)\b({})\b", QUALIFICATION_TERMS.join("|")))
                .expect("Invalid qualification regex");

        // Standard match kind so overlapping terms ("React" / "React Native")
        // are all reported.
        let skill_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(SKILL_TERMS)
            .expect("Invalid skill dictionary");

        let escaped: Vec<String> = JOB_TITLE_TERMS.iter().map(|t| regex::escape(t)).collect();
        let job_title_pattern = Regex::new(&format!("(?i)({})", escaped.join("|")))
            .expect("Invalid job title regex");

        Self {
            qualification_pattern,
            skill_matcher,
            job_title_pattern,
        }
    }

    /// Distinct qualification tokens as written in the text, in order of first appearance
    pub fn qualifications(&self, text: &str) -> Vec<String> {
        unique_in_order(
            self.qualification_pattern
                .find_iter(text)
                .map(|m| m.as_str().to_string()),
        )
    }

    /// Dictionary skills found as whole words, in dictionary order
    pub fn skills(&self, text: &str) -> Vec<String> {
        let mut found = vec![false; SKILL_TERMS.len()];

        for mat in self.skill_matcher.find_overlapping_iter(text) {
            if is_word_boundary(text, mat.start()) && is_word_boundary(text, mat.end()) {
                found[mat.pattern().as_usize()] = true;
            }
        }

        SKILL_TERMS
            .iter()
            .zip(found)
            .filter(|(_, hit)| *hit)
            .map(|(term, _)| term.to_string())
            .collect()
    }

    /// Distinct job titles as written in the text, in order of first appearance
    pub fn job_titles(&self, text: &str) -> Vec<String> {
        unique_in_order(
            self.job_title_pattern
                .find_iter(text)
                .map(|m| m.as_str().to_string()),
        )
    }

    pub fn skill_count(&self) -> usize {
        SKILL_TERMS.len()
    }
}

/// Regex-style `\b`: word-ness of the characters on either side differs
fn is_word_boundary(text: &str, index: usize) -> bool {
    let before = text[..index].chars().next_back().map_or(false, is_word_char);
    let after = text[index..].chars().next().map_or(false, is_word_char);
    before != after
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn unique_in_order(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(item.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualifications_keep_text_casing_and_dedupe() {
        let text = "B.Tech in CSE from XYZ. Also MBA (2019). mba again. B.Tech repeated.";
        let found = vocabulary().qualifications(text);

        assert_eq!(found, vec!["B.Tech", "MBA", "mba"]);
    }

    #[test]
    fn test_qualification_prefers_first_alternative() {
        // "Bachelor" is listed before "Bachelor of Technology", so it wins
        let found = vocabulary().qualifications("Bachelor of Technology, 2016");
        assert_eq!(found, vec!["Bachelor"]);
    }

    #[test]
    fn test_qualification_requires_whole_words() {
        let found = vocabulary().qualifications("Camera operator, cascade");
        assert!(found.is_empty());
    }

    #[test]
    fn test_skills_whole_word_case_insensitive() {
        let text = "Worked with python, DJANGO and react native. Javascripting is not a skill.";
        let found = vocabulary().skills(text);

        assert!(found.contains(&"Python".to_string()));
        assert!(found.contains(&"Django".to_string()));
        assert!(found.contains(&"React".to_string()));
        assert!(found.contains(&"React Native".to_string()));
        assert!(!found.contains(&"JavaScript".to_string()));
        assert!(!found.contains(&"Java".to_string()));
    }

    #[test]
    fn test_skills_follow_dictionary_order() {
        let found = vocabulary().skills("Docker, SQL, Python");
        assert_eq!(found, vec!["Python", "SQL", "Docker"]);
    }

    #[test]
    fn test_symbol_terminated_skills_follow_regex_boundaries() {
        // `\bC\+\+\b` needs a word character right after the last '+'
        assert!(vocabulary().skills("C++ developer").is_empty());
        assert_eq!(vocabulary().skills("C++11"), vec!["C++"]);
    }

    #[test]
    fn test_job_titles_match_inside_words() {
        let found = vocabulary().job_titles("Senior software engineer; ex-Supervisors lead");
        assert_eq!(found, vec!["software engineer", "Supervisor"]);
    }

    #[test]
    fn test_word_boundary() {
        assert!(is_word_boundary("a b", 1));
        assert!(is_word_boundary("ab", 0));
        assert!(!is_word_boundary("ab", 1));
        assert!(!is_word_boundary("", 0));
    }
}
