use super::{Cv, CvEntry, CvProject, EducationEntry, ExperienceNote, SkillGroup};

static CV: Cv = Cv {
    summary: "Experienced Product Designer with a strong focus on user-centric design and problem-solving. Proven track record in delivering scalable design solutions, including an AI HR dashboard that enhanced onboarding efficiency and a redesigned media interface adopted by 100+ users globally.",
    skills: &[
        SkillGroup {
            title: "Design",
            skills: &["UX Design", "UI Design", "System Design", "Product Design", "Wireframing", "Prototyping"],
        },
        SkillGroup {
            title: "Research",
            skills: &["UX Research", "Usability Testing", "Design Thinking", "User Journey Mapping", "Persona Creation"],
        },
        SkillGroup {
            title: "Tools & Methods",
            skills: &["Figma", "Design Systems", "Agile Methodology", "Collaborative Workshops", "Iterative Design"],
        },
    ],
    experience: &[
        CvEntry {
            role: "Product Designer at Acqify",
            period: "Dec 2023 - Jan 2024",
            setting: "Online",
            summary: "Conducted comprehensive UX research to gather insights into user behaviors and preferences, ensuring that design decisions were informed by real data. This work involved analyzing feedback, collaborating with cross-functional teams, and applying user-centric principles to deliver impactful results.",
            highlights: &[
                "Improved User Satisfaction: Analyzed user feedback and implemented iterative design processes, achieving a measurable 3% improvement in overall user satisfaction.",
                "Enhanced UI Consistency: Collaborated with developers and stakeholders to implement user-centric UI enhancements, ensuring consistency across product features and improving usability metrics.",
                "Fostered Innovation: Led design thinking workshops, fostering a culture of creativity and problem-solving within the team, which directly contributed to the development of innovative design solutions.",
                "Established Design Systems: Contributed to the creation of a cohesive design system, standardizing components to improve efficiency and maintain usability across multiple platforms.",
            ],
        },
        CvEntry {
            role: "Product Designer at Community Dreams Foundation",
            period: "Dec 2023 - Present",
            setting: "Volunteer, Online",
            summary: "Designed an AI-powered HR dashboard and website using Figma, focusing on streamlining onboarding and task processes to enhance efficiency and user experience, supporting the organization's volunteer marketplace.",
            highlights: &[
                "AI HR Dashboard Design: Created an AI-driven HR dashboard to simplify onboarding and task management processes, resulting in a 70% reduction in onboarding time and improved task allocation efficiency.",
                "Volunteer Marketplace: Developed a user-friendly volunteer marketplace for job searching, connecting volunteers with available opportunities and enhancing user engagement.",
                "User Journey Mapping: Designed three distinct user journeys (volunteers, organizations, and administrators) to optimize each group's experience, leading to a 30% increase in engagement and task completion rates.",
                "UX/UI Design with Figma: Delivered a visually appealing, intuitive interface using Figma, ensuring an accessible and seamless experience for all users, regardless of technical expertise.",
            ],
        },
        CvEntry {
            role: "Product Designer at Santos Creations Educational Foundation",
            period: "Nov 2023 - Present",
            setting: "Volunteer, Online",
            summary: "Collaborated with the Santos Creations Educational Foundation to design and implement a comprehensive UX and UI strategy for their educational website, which positively impacted over 1,000 users and continues to evolve.",
            highlights: &[
                "Developed a Design System: Created a cohesive design system with over 30 reusable components, ensuring consistency in branding, usability, and scalability for future updates and expansions.",
                "Crafted User Journeys: Designed detailed user journey maps and personas for three core user groups (students, educators, and donors), leading to a 20% improvement in navigation efficiency based on usability testing.",
                "Collaborative Implementation: Facilitated workshops with stakeholders and collected feedback from over 50 users, ensuring the design addressed real-world needs effectively.",
                "Legacy of the Project: Provided a sustainable framework that continues to serve more than 1,000 users, with ongoing updates and enhancements by the organization after my involvement.",
            ],
        },
        CvEntry {
            role: "Product Designer at Murphy Charitable Foundation Uganda",
            period: "Nov 2023 - Present",
            setting: "Volunteer, Online",
            summary: "Contributed to the Murphy Charitable Foundation Uganda as part of the Panpal program, focusing on impactful design projects that enhanced user experiences and broadened the organization's global reach.",
            highlights: &[
                "Developed Chat Application: Designed the UX and UI for a chat app, enabling seamless communication for over 100+ users across Uganda and other parts of the world.",
                "Innovated Voice Mail Design: Created a user-friendly voice mail design, improving accessibility and functionality for diverse user groups.",
                "Redesigned Media Interfaces: Redesigned the video and image UI, enhancing the user experience and ensuring intuitive navigation and engagement.",
            ],
        },
    ],
    education: &[
        EducationEntry {
            school: "Technical University Sofia, branch Plovdiv",
            period: "Sep 2020 - Jun 2024",
            degree: "Bachelor's degree, Design and Printing Communication",
        },
        EducationEntry {
            school: "French High School \"Antoine de Saint-Exupery\"",
            period: "Jun 2015 - Jun 2020",
            degree: "Secondary, English Language and Literature, General",
        },
        EducationEntry {
            school: "Dusho Hadzidekov",
            period: "Jun 2009 - Jun 2015",
            degree: "Primary, General",
        },
    ],
    projects: &[
        CvProject {
            title: "Pen Pal Magic App Redesign",
            summary: "Led the complete redesign of a pen pal application, focusing on improving user engagement and fostering meaningful connections across borders.",
            outcomes: &["Increased user engagement by 47%", "Improved user satisfaction scores from 3.2/5 to 4.7/5"],
        },
        CvProject {
            title: "E-commerce Platform",
            summary: "Designed an end-to-end marketplace connecting artisans with customers, emphasizing product discovery and storytelling.",
            outcomes: &["Increased conversion rate by 28%", "Reduced cart abandonment by 35%"],
        },
        CvProject {
            title: "Healthcare Dashboard",
            summary: "Created a data visualization interface for healthcare professionals that simplifies complex patient information.",
            outcomes: &["Reduced time spent looking for information by 32%", "Improved decision-making accuracy by 24%"],
        },
    ],
    about_paragraphs: &[
        "Experienced Product Designer with a strong focus on user-centric design and problem-solving. I'm Emil Donchev, a dedicated product designer from Plovdiv, Bulgaria, with a proven track record in delivering scalable design solutions.",
        "I recently graduated from the Technical University of Sofia, branch Plovdiv, where I worked on multiple case studies and gained hands-on experience in both volunteer and professional environments. My goal is to create designs that not only look great but also address real business needs, ensuring value for users and room for growth. Currently, I'm also developing Job+, a new hiring website specializing in job searching.",
    ],
    approach_paragraphs: &[
        "I believe that great design is about solving real problems for real people. My process always starts with comprehensive UX research to gather insights into user behaviors and preferences, ensuring that design decisions are informed by real data. From there, I work to create solutions that are not only functional but also delightful to use.",
        "My background in both design and technology allows me to bridge the gap between what's desirable from a user perspective and what's feasible from a technical standpoint.",
    ],
    about_experience: &[
        ExperienceNote {
            role: "Product Designer at Eurovoyage",
            period: "2024 - 2025",
            summary: "Led the project from initial concept (0 to 1), designing the core platform and developing the sales and marketing strategy for a premium European restaurant & attraction directory.",
        },
        ExperienceNote {
            role: "Product Designer at Acqify",
            period: "Dec 2023 - Jan 2024",
            summary: "Conducted comprehensive UX research and implemented iterative design processes, achieving a measurable improvement in overall user satisfaction and enhancing UI consistency across product features.",
        },
        ExperienceNote {
            role: "Product Designer at Pen pal (Volunteer)",
            period: "2023 - Present",
            summary: "Adapted the existing Pen Pal project from a web application to a mobile version, focusing on improving accessibility and engagement for children and international pen pals.",
        },
        ExperienceNote {
            role: "Product Designer at Lopake (Volunteer)",
            period: "2024 - Present",
            summary: "Contributed to the design of the homepage and login page functionalities for the Lopake platform.",
        },
        ExperienceNote {
            role: "Product Designer at Community Dreams Foundation (Volunteer)",
            period: "Dec 2023 - Present",
            summary: "Designed an AI-powered HR dashboard that reduced onboarding time by 70% and developed a user-friendly volunteer marketplace, optimizing the experience for volunteers, organizations, and administrators.",
        },
        ExperienceNote {
            role: "Product Designer at Santos Creations Educational Foundation (Volunteer)",
            period: "Nov 2023 - Present",
            summary: "Created a comprehensive UX/UI strategy for an educational website, including a design system with over 30 reusable components that serves more than 1,000 users.",
        },
    ],
    about_skills: &[
        SkillGroup {
            title: "Design",
            skills: &["UX Design", "UI Design", "System Design", "Product Design", "Wireframing", "Prototyping"],
        },
        SkillGroup {
            title: "Tools",
            skills: &["Figma", "Design Systems", "Usability Testing", "Design Thinking", "Agile Methodology"],
        },
    ],
};

pub fn cv() -> &'static Cv {
    &CV
}
