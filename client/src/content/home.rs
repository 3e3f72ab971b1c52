use super::{Project, Testimonial};

static PROJECTS: [Project; 4] = [
    Project {
        title: "Santos Creations Educational Foundation",
        description: "EMPOWERING AFRICAN COMMUNITIES THROUGH DIGITAL INNOVATION • 2024",
        logo: "/Africa/Logo.png",
        slug: "Afrika",
    },
    Project {
        title: "Eurovoyage",
        description: "STRATEGIC DESIGN FOR EUROPEAN TRAVEL EXPERIENCES • 2024",
        logo: "/eurovoyage/LogoEU.png",
        slug: "eurovoyage",
    },
    Project {
        title: "Pen Pal Magic App",
        description: "CONNECTING UGANDAN CHILDREN WITH GLOBAL PEN PALS • 2023",
        logo: "/pen-pal-images/PEN PAL LOGO.png",
        slug: "pen-pal",
    },
    Project {
        title: "CDF Internal Platform",
        description: "INTERNAL PRODUCT • STREAMLINING OPERATIONS FOR 20+ TEAMS • 2023",
        logo: "/Dream-ai/logo-dark.png",
        slug: "Dream-Ai",
    },
];

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I'm happy to strongly recommend Emil Donchev for any UI development work. Emil was a very strong contributor to our Pattern Sphere project. He created useful designs and developed prototypes of various pages very quickly. In addition, he was an excellent team player. He fielded questions and requests from other volunteers quickly. To me, as the project owner, I especially appreciated his assistance, teaching me the importance of various elements of modern web page design and providing numerous examples that broadened my understanding. His contributions had a very important long-term impact on the project.",
        author: "Doug Schuler",
        role: "Founder, Pattern Sphere",
    },
    Testimonial {
        quote: "Emil's expertise in UI/UX design helped lay a strong foundation for our platform's development. His work on our landing page, dashboard, and examination portal significantly enhanced user navigation and engagement. We're proud to recognize him as an EduAid Africa Ambassador for his outstanding contributions.",
        author: "Engr. (Dr.) Babashola Santos Aderibigbe",
        role: "Chief Visionary Officer, Santos Creations Educational Foundation",
    },
    Testimonial {
        quote: "Working with Emil on our European travel platform was a remarkable experience. His user-centered design approach and attention to detail significantly improved our user engagement metrics. His ability to combine aesthetic appeal with functional simplicity made our complex booking system accessible to all users, regardless of their tech proficiency.",
        author: "Mikhail Petrov",
        role: "Project Manager, Eurovoyage",
    },
];

/// Project cards in home-page order.
pub fn home_projects() -> &'static [Project] {
    &PROJECTS
}

pub fn home_testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}
