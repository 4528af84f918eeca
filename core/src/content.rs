//! Static site content.
//!
//! Records are declared in display order and never mutated.

// ***************
// *** Profile ***
// ***************

#[derive(PartialEq, Debug)]
pub struct Profile {
    pub name: &'static str,

    /// Roles cycled through in the home page headline.
    pub roles: &'static [&'static str],
    pub summary: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,

    /// Path of the downloadable resume.
    pub resume: &'static str,

    /// Path of the layout background image.
    pub background: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Sai Kumar Kaipelly",
    roles: &[
        "Java Full Stack Developer",
        "Cloud Engineer",
        "Software Craftsman",
    ],
    summary: "I’m a passionate full stack developer with 4+ years of experience crafting scalable, secure, and performant web applications. I specialize in Java, Spring Boot, React, Angular, AWS, and more.",
    about: "I'm a detail-oriented Full Stack Developer with over 4 years of experience building scalable web applications and intuitive user interfaces. Passionate about combining clean code, creative UI, and cutting-edge technology to solve real-world problems.",
    email: "saikumar.k@mymailshub.com",
    phone: "816-352-4575",
    linkedin: "https://www.linkedin.com/in/saikumarkaipelly",
    resume: "/Sai_Kumar_Kaipelly_Java_Full_Stack_Developer.pdf",
    background: "/bg-pattern.jpg",
};

/// Cycles through the profile roles.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RoleCycle {
    len: usize,
    index: usize,
}

impl RoleCycle {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Advances to the next role, wrapping around.
    pub fn advance(self) -> Self {
        if self.len == 0 {
            return self;
        }

        Self {
            len: self.len,
            index: (self.index + 1) % self.len,
        }
    }
}

// **************
// *** Skills ***
// **************

#[derive(PartialEq, Debug)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILLS: &[SkillCategory] = &[
    SkillCategory {
        name: "Languages",
        skills: &["Java", "C++", "Python", "JavaScript", "TypeScript", "SQL"],
    },
    SkillCategory {
        name: "Frontend",
        skills: &["React.js", "Angular.js", "HTML5", "CSS3", "Bootstrap", "Redux"],
    },
    SkillCategory {
        name: "Backend",
        skills: &["Spring Boot", "Spring MVC", "Node.js", "Express.js", "GraphQL"],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        skills: &["AWS", "Docker", "Kubernetes", "Jenkins", "GitHub", "CI/CD"],
    },
];

// ******************
// *** Experience ***
// ******************

#[derive(PartialEq, Debug)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub work: &'static [&'static str],
}

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        company: "PNC Financial Services",
        role: "Java Full Stack Developer",
        duration: "Jul 2024 – Present",
        work: &[
            "Optimized React caching, improved load time by 25%",
            "Implemented OAuth 2.0 and AWS IAM",
            "Adopted GraphQL and enhanced Spring Boot efficiency",
        ],
    },
    Experience {
        company: "Zensar Technologies",
        role: "Java Full Stack Developer",
        duration: "Jun 2021 – Jun 2023",
        work: &[
            "Modular Angular design with enhanced testability",
            "Built scalable Java 11 services with GraphQL and MongoDB",
        ],
    },
    Experience {
        company: "Fusion Software Technologies",
        role: "Java Full Stack Developer",
        duration: "Jan 2020 – May 2021",
        work: &[
            "Built microservices and Angular interfaces",
            "Containerized apps using AWS EKS",
        ],
    },
];

// ****************
// *** Projects ***
// ****************

#[derive(PartialEq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub source: &'static str,
    pub live: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "My own professional portfolio built with React and Tailwind.",
        tech: &["React", "Tailwind CSS", "Framer Motion"],
        source: "#",
        live: "#",
    },
    Project {
        title: "Task Manager App",
        description: "To-do list web app with authentication and cloud sync.",
        tech: &["React", "Firebase", "Bootstrap"],
        source: "#",
        live: "#",
    },
];

// ********************
// *** Testimonials ***
// ********************

#[derive(PartialEq, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[Testimonial {
    quote: "Sai is a dedicated and talented developer who always delivers high-quality work. He's a great asset to any team!",
    author: "Former Manager",
}];

#[cfg(test)]
#[path = "./content_test.rs"]
mod content_test;
