use super::{
    CaseStudy, Comparison, DesignProcess, ExternalLink, Iteration, KeyFeature, MediaItem, Metric, NextProject,
    PhaseMedia, Problem, ProcessPhase, ProductShowcase, Research, ResearchMethod, ResultMetric, Solutions,
    Testimonial,
};

// =============================================================================
// SANTOS CREATIONS
// =============================================================================

const AFRIKA_ITERATIONS: [&[Iteration]; 2] = [
    &[
        Iteration {
            src: "/Africa/old design.png",
            alt: "Initial design version",
            label: "Initial Design",
            note: "Initial prototype with basic functionality but poor accessibility.",
        },
        Iteration {
            src: "/Africa/design verson 2.png",
            alt: "Second design iteration",
            label: "Version 2",
            note: "Improved spacing and hierarchy, added the sign in, sign up and forgotten password flows, and created the donation and scholarship flows.",
        },
        Iteration {
            src: "/Africa/design verson 3 improvemnt.png",
            alt: "Third design iteration",
            label: "Version 3",
            note: "Refined the donation and scholarship flows to make them easier, added all policies, terms and conditions, and added Calendly.",
        },
    ],
    &[
        Iteration {
            src: "/Africa/design verson 4 improvemnt.png",
            alt: "Fourth design iteration",
            label: "Version 4",
            note: "Created 13 dashboards for the admin and every group of users.",
        },
        Iteration {
            src: "/Africa/Africa home page.png",
            alt: "Final improved design - homepage",
            label: "Final Version",
            note: "Improved the home page design and added animations and effects.",
        },
    ],
];

const AFRIKA: CaseStudy = CaseStudy {
    slug: "Afrika",
    title: "Santos Creations Educational Foundation",
    subtitle: "Empowering African communities through digital innovation",
    description: "A comprehensive digital platform designed to connect and empower African communities, featuring cultural exchange, educational resources, and community engagement tools.",
    hero: Some(MediaItem::image(
        "/Africa/Group 239185.png",
        "Afrika platform homepage showcasing cultural exchange and community features",
    )),
    metrics: &[
        Metric { label: "Community Reach", value: "10K+", description: "Active users across African countries" },
        Metric { label: "Cultural Content", value: "1000+", description: "Cultural stories and resources shared" },
        Metric { label: "User Engagement", value: "+85%", description: "Increase in community participation" },
    ],
    overview: &[
        ("Client", "Afrika Foundation"),
        ("Timeline", "November 2024 - March 2025"),
        ("Role", "UX/UI Designer"),
        ("Team", "Remote collaboration with African developers + two other designers and a product manager"),
        ("Platform", "Web Application"),
        ("Tools", "Figma, User Research, Design Systems"),
    ],
    problem: Problem {
        statement: "The Santos foundation, which already established Nasa.africa, needed an additional platform focused on supporting educational programs and scholarships in Africa. They required a user-friendly website that would effectively facilitate donations for educational initiatives and scholarship programs while showcasing the impact of their work.",
        goals: &[
            "Create a donation-focused platform that supports African educational programs",
            "Design intuitive user flows for scholarship applications and donations",
            "Build engaging content showcasing the impact of educational initiatives",
            "Develop transparent systems for tracking donations and scholarship allocations",
        ],
    },
    research: Research {
        methods: &[
            ResearchMethod {
                title: "Community Interviews",
                count: "2+ participants",
                insights: "Deep understanding of cultural needs and digital challenges",
            },
            ResearchMethod {
                title: "SWOT Analysis",
                count: "10 sessions",
                insights: "Identified strengths, weaknesses, opportunities, and threats of the existing platform",
            },
            ResearchMethod {
                title: "Usability Testing",
                count: "3 participants",
                insights: "Testing the existing platform and gathering feedback",
            },
        ],
        key_findings: &[
            "Users need a clear, transparent donation process with multiple payment options",
            "Scholarship applicants require a straightforward application flow with minimal steps",
            "Compelling impact stories and visual evidence increase donation likelihood",
            "Regular updates on fund allocation build trust and encourage recurring donations",
        ],
    },
    showcase: None,
    links: &[],
    design_process: None,
    process: &[
        ProcessPhase {
            title: "Cultural Research & Design",
            description: "Working closely with the founder and product manager, I visualized the existing documentation into actionable design artifacts. Based on their detailed PRD and 6 additional requirement documents, I created comprehensive sitemaps and user flows that accurately represented their vision while optimizing for user experience.",
            deliverables: &[
                "Sitemap visualization",
                "User journey mapping",
                "Information architecture refinement",
                "Navigation system design",
            ],
            media: PhaseMedia::Image(MediaItem::image("/Africa/Primary Sitemap.png", "Cultural Research & Design")),
        },
        ProcessPhase {
            title: "Community-Centered Design",
            description: "Through an iterative design process, I evolved the homepage design based on user feedback and testing. The side-by-side comparison shows the original concept and the refined version 2 with improved information hierarchy and clearer donation pathways.",
            deliverables: &[
                "User feedback implementation",
                "Iterative design process",
                "Improved UI components",
                "Enhanced donation flows",
            ],
            media: PhaseMedia::Comparison(Comparison {
                hint: "Drag the slider to compare the full length of both designs",
                base: MediaItem::image("/Africa/Africa home page.png", "Original landing page design"),
                overlay: MediaItem::image("/Africa/Landing page.png", "Revised landing page design"),
                overlay_label: "Final Design",
                base_label: "Original Concept",
            }),
        },
        ProcessPhase {
            title: "Accessibility Implementation",
            description: "I conducted an extensive accessibility audit and created multiple design iterations to ensure the platform was usable by everyone. The evolution from the initial design to the final version shows significant improvements in readability, contrast, and navigation patterns.",
            deliverables: &[
                "Accessibility guidelines",
                "Color contrast improvements",
                "Keyboard navigation",
                "Screen reader optimization",
            ],
            media: PhaseMedia::Iterations {
                hint: "Design evolution through multiple iterations",
                rows: &AFRIKA_ITERATIONS,
            },
        },
    ],
    solutions: None,
    results: &[
        ResultMetric {
            label: "User Growth",
            before: "1,000 users",
            after: "10,000+ users",
            improvement: "+900%",
        },
        ResultMetric {
            label: "Content Sharing",
            before: "100 posts/month",
            after: "1,000+ posts/month",
            improvement: "+900%",
        },
        ResultMetric {
            label: "Community Events",
            before: "5 events/month",
            after: "50+ events/month",
            improvement: "+900%",
        },
    ],
    testimonials: &[],
    learnings: &[
        "Cultural authenticity is crucial for community adoption and engagement",
        "Offline-first design is essential for inclusive digital platforms in Africa",
        "Community involvement in the design process leads to more relevant solutions",
        "Visual and audio content are powerful tools for crossing language barriers",
    ],
    personal_growth: &[],
    next: NextProject { title: "Eurovoyage", slug: "eurovoyage" },
};

// =============================================================================
// EUROVOYAGE
// =============================================================================

const EUROVOYAGE: CaseStudy = CaseStudy {
    slug: "eurovoyage",
    title: "Eurovoyage",
    subtitle: "Premium European Restaurant & Attraction Directory",
    description: "A curated premium directory platform showcasing the finest restaurants and attractions across Europe, designed to help travelers discover authentic local experiences. Starting with a focused premium product to establish quality and brand value.",
    hero: Some(MediaItem::image("/eurovoyage/galaxy-tab-s8-ultra.png", "Eurovoyage platform on a tablet")),
    metrics: &[
        Metric { label: "Target Users", value: "150K", description: "Monthly active users goal" },
        Metric { label: "User Groups", value: "3", description: "Admin, Business Owners, Users" },
        Metric { label: "Project Stage", value: "MVP", description: "Initial platform design completed" },
    ],
    overview: &[
        ("Client", "Eurovoyage (Startup)"),
        ("Timeline", "December 2024 - March 2025"),
        ("Role", "Product Designer"),
        ("Team", "Collaborated directly with the founder"),
        ("Platform", "Web Application"),
        ("Tools", "Figma, User Research, Business Strategy"),
    ],
    problem: Problem {
        statement: "The idea is an easily scalable premium business that offers a directory of premium restaurants and attractions across Europe.",
        goals: &[
            "Design a premium platform focusing on high-end restaurants and attractions",
            "Create a business model starting with a core premium product",
            "Develop a scalable foundation for future product offerings",
            "Scale to 150k monthly users",
        ],
    },
    research: Research {
        methods: &[
            ResearchMethod {
                title: "Content Analysis",
                count: "50+ videos",
                insights: "Analyzing influencer content to identify premium locations and experiences",
            },
            ResearchMethod {
                title: "Technical Integration",
                count: "3 platforms",
                insights: "Testing integration between Google Places, Airtable, and Apify",
            },
            ResearchMethod {
                title: "Data Pipeline",
                count: "2 workflows",
                insights: "Creating automated workflows for content collection and enrichment",
            },
        ],
        key_findings: &[
            "Influencer content provides high-quality location recommendations",
            "Automated data collection significantly reduces manual work",
            "Google Place ID ensures accurate location data",
            "Structured data pipeline enables scalable content growth",
        ],
    },
    showcase: None,
    links: &[],
    design_process: None,
    process: &[
        ProcessPhase {
            title: "Strategic Direction",
            description: "The core strategy leverages existing content from influencers (bloggers, YouTubers, and content creators) who visit restaurants and destinations across Europe. We developed an efficient system where the founder identifies these locations from influencer content, processes them through Google Place ID, and stores them in Airtable. This data is then enriched using Apify to create comprehensive restaurant and destination templates. This approach allows Eurovoyage to benefit from established influencer traffic while building a valuable content database.",
            deliverables: &[
                "Influencer content tracking system",
                "Google Place ID integration",
                "Airtable database structure",
                "Apify data enrichment pipeline",
            ],
            media: PhaseMedia::SvgFile(MediaItem::image("/eurovoyage/strategy.svg", "Strategic Direction")),
        },
        ProcessPhase {
            title: "Product Design",
            description: "I designed an elegant and intuitive interface that emphasizes the premium nature of the content. The design focuses on showcasing high-quality imagery and detailed information about each venue, while maintaining a clean and sophisticated aesthetic.",
            deliverables: &["User flows", "Wireframes", "UI design", "Interactive prototype"],
            media: PhaseMedia::Videos(&[MediaItem::video(
                "/Eurovoyage/2025-04-11 17-01-41.mp4",
                "Product Design Walkthrough",
            )]),
        },
        ProcessPhase {
            title: "Marketing & Sales Strategy",
            description: "The marketing strategy targets premium users through curated social media campaigns on Twitter and Facebook, driving traffic to the Eurovoyage website. The sales funnel guides users from initial awareness on these platforms to the website, then to a 'Submit' button for engagement, followed by video content explaining how the platform works, ultimately leading to payment and subscription plans.",
            deliverables: &[
                "Social media campaign strategy",
                "Sales funnel design",
                "Video content script",
                "Subscription plan structure",
            ],
            media: PhaseMedia::Image(MediaItem::image("/Eurovoyage/Group 6.png", "Marketing and Sales Strategy Flow")),
        },
    ],
    solutions: None,
    results: &[
        ResultMetric { label: "Design Completion", before: "0%", after: "100%", improvement: "Completed" },
        ResultMetric {
            label: "Project Status",
            before: "In Progress",
            after: "Handed Over",
            improvement: "Left Project",
        },
        ResultMetric { label: "Documentation", before: "0%", after: "100%", improvement: "Complete" },
    ],
    testimonials: &[],
    learnings: &[
        "Improving the design through iterative feedback helped create a more intuitive and premium user experience",
        "Developing a focused marketing strategy across social media platforms is crucial for reaching the target audience",
        "Creating a clear sales funnel from awareness to conversion helps guide users through the journey effectively",
        "Premium market positioning requires consistent design language and high-quality visuals throughout all touchpoints",
        "Note: I left the project after completing the design phase and documentation. The final implementation and launch results are unknown to me.",
    ],
    personal_growth: &[],
    next: NextProject { title: "Dream AI", slug: "Dream-Ai" },
};

// =============================================================================
// PEN PAL
// =============================================================================

const PEN_PAL_PROCESS: [MediaItem; 8] = [
    MediaItem::image("/pen-pal-images/Екранна снимка 2025-04-02 180854.png", "Initial Research Planning")
        .captioned(
            "Initial Research Framework",
            "Planning document outlining research objectives and methodology",
        )
        .in_phase("Research", "Research Planning")
        .with_details(
            "### Research Objectives\n\n\
             - Understand how children interact with digital tools\n\
             - Evaluate language barriers and accessibility needs\n\
             - Assess guardian involvement in technology use\n\n\
             ### Key Questions\n\n\
             - How do children interact with penpal tech?\n\
             - Will there always be an adult (tutor/guardian) present?\n\
             - What's the pre-requisite for children to participate?\n",
        ),
    MediaItem::image("/pen-pal-images/Екранна снимка 2025-04-02 180914.png", "Research Methodology")
        .captioned("Testing Structure & Approach", "Detailed testing methodology and participant groups")
        .in_phase("Research", "Research Methodology")
        .with_details(
            "### Testing Structure\n\n\
             - Individual sessions with children\n\
             - Guardian/tutor assistance available\n\
             - Mixed language testing (English & Local)\n\
             - Video recording for analysis\n\n\
             ### Pre-Testing Preparation\n\n\
             - Explain internet concepts\n\
             - Introduce digital vs physical letters\n\
             - Obtain recording consent\n\
             - Setup screen sharing\n",
        ),
    MediaItem::image("/pen-pal-images/Екранна снимка 2025-04-02 180928.png", "Research Findings")
        .captioned("Initial Research Results", "Analysis of key findings from initial research phase")
        .in_phase("Research", "Research Findings")
        .with_details(
            "### Key Findings\n\n\
             - Adult supervision is crucial for technology use\n\
             - Language barriers affect initial understanding\n\
             - Visual guides are more effective than text\n\
             - Need for simplified technical terminology\n",
        ),
    MediaItem::image("/pen-pal-images/Екранна снимка 2025-04-02 172902.png", "Design Implementation")
        .captioned("User Flow & Interface Design", "Implementation of research findings into design")
        .in_phase("Design", "Design Implementation")
        .with_details(
            "### Design Decisions\n\n\
             - Simplified navigation structure\n\
             - Visual cues for important actions\n\
             - Multilingual support integration\n\
             - Guardian-assisted features\n",
        ),
    MediaItem::image("/pen-pal-images/test 1.png", "Initial Testing")
        .captioned("First Round Testing", "Initial user testing with basic prototype")
        .in_phase("Testing", "Test Phase 1")
        .with_details(
            "### Test Group A: English Onboarding Video\n\n\
             - Objective: Open and reply to letters\n\
             - Method: Video instruction followed by hands-on testing\n\
             - Results: Some confusion, multiple questions asked\n",
        ),
    MediaItem::image("/pen-pal-images/test 2.png", "Second Testing Phase")
        .captioned("Second Round Testing", "Testing with improved prototype based on initial feedback")
        .in_phase("Testing", "Test Phase 2")
        .with_details(
            "### Test Group B: Local Language Video\n\n\
             - Objective: Evaluate local language effectiveness\n\
             - Method: Localized video instruction\n\
             - Results: Similar confusion levels to English version\n",
        ),
    MediaItem::image("/pen-pal-images/test 3.png", "Third Testing Phase")
        .captioned("Third Round Testing", "Testing with integrated tips and guidance")
        .in_phase("Testing", "Test Phase 3")
        .with_details(
            "### Test Group C: English Tips Integration\n\n\
             - Objective: Test in-app guidance effectiveness\n\
             - Method: Interactive tips during use\n\
             - Results: Smoothest experience, minimal confusion\n",
        ),
    MediaItem::image("/pen-pal-images/test 4.png", "Final Testing Phase")
        .captioned("Final Testing Round", "Comprehensive testing with all improvements")
        .in_phase("Testing", "Test Phase 4")
        .with_details(
            "### Test Group D: Local Language Tips\n\n\
             - Objective: Validate localized guidance\n\
             - Method: Interactive tips in local language\n\
             - Results: Effective but not significantly better than English tips\n",
        ),
];

const PEN_PAL_SCREENS: [MediaItem; 3] = [
    MediaItem::image("/pen-pal-images/1st image.png", "Pen Pal Magic App inbox screen").captioned(
        "Message Inbox",
        "Users can see all their messages and conversations with pen pals around the world.",
    ),
    MediaItem::image("/pen-pal-images/2nd image.png", "Message composition screen").captioned(
        "Message Composer",
        "The letter writing interface with voice message and media attachment options.",
    ),
    MediaItem::image("/pen-pal-images/3th image.png", "Message writing screen")
        .captioned("Writing Interface", "A clean, simple interface for writing messages to pen pals."),
];

const PEN_PAL_FEATURES: [KeyFeature; 2] = [
    KeyFeature {
        title: "Voice Mail Communication",
        description: "An innovative voice messaging system that allows children to communicate naturally with their pen pals, overcoming language and literacy barriers.",
        media: MediaItem::video("/pen-pal-images/2025-04-02 17-24-06.mp4", "Voice Mail Feature Demo")
            .captioned(
                "Voice Mail Communication Feature",
                "Demonstration of how children can send voice messages to their pen pals",
            )
            .with_details(
                "### Key Benefits\n\n\
                 - Natural communication in their native language\n\
                 - Reduces anxiety about written communication\n\
                 - Builds stronger emotional connections\n\
                 - Easier for children with limited literacy\n\n\
                 ### How It Works\n\n\
                 - Simple voice recording interface\n\
                 - Automatic message transcription\n\
                 - Translation support for pen pals\n\
                 - Voice playback with speed control\n",
            ),
    },
    KeyFeature {
        title: "Conversation Templates",
        description: "Pre-designed conversation starters and templates that help children overcome the initial barrier of starting conversations in English.",
        media: MediaItem::video("/pen-pal-images/2025-04-02 17-27-14.mp4", "Conversation Templates Demo")
            .captioned(
                "Conversation Templates Feature",
                "Showing how children can use templates to start meaningful conversations",
            )
            .with_details(
                "### Key Benefits\n\n\
                 - Reduces anxiety about starting conversations\n\
                 - Provides proper English language structure\n\
                 - Helps build confidence in communication\n\
                 - Maintains cultural sensitivity\n\n\
                 ### Template Categories\n\n\
                 - Personal introductions\n\
                 - Daily life and activities\n\
                 - Cultural exchange topics\n\
                 - Questions and curiosity\n",
            ),
    },
];

const PEN_PAL_TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "This app has changed how I connect with my pen pal. I can share about my day and see their response so much faster than before!",
        author: "Sarah",
        role: "Program Participant, 12 years old",
    },
    Testimonial {
        quote: "Emil and the design team created an intuitive interface that works perfectly for our children with varying literacy levels and technical experience.",
        author: "Program Coordinator",
        role: "Murphy Charitable Foundation Uganda",
    },
    Testimonial {
        quote: "The app has significantly reduced our logistical challenges and allowed us to expand the program to reach more children in need.",
        author: "Foundation Director",
        role: "Murphy Charitable Foundation Uganda",
    },
    Testimonial {
        quote: "As an international pen pal, I appreciate how the app makes it easy to maintain a consistent connection with my pen pal in Uganda.",
        author: "International Volunteer",
        role: "Pen Pal Program",
    },
];

const PEN_PAL: CaseStudy = CaseStudy {
    slug: "pen-pal",
    title: "Pen Pal Magic App",
    subtitle: "Creating and improving existing web app to mobile one",
    description: "A mobile application designed for Murphy Charitable Foundation Uganda to facilitate meaningful connections between vulnerable children in Uganda and international pen pals, improving emotional well-being and educational outcomes.",
    hero: None,
    metrics: &[
        Metric { label: "User Impact", value: "2000+", description: "Children in Uganda using the app" },
        Metric { label: "Letter Completion", value: "+32%", description: "Improvement in correspondence rates" },
        Metric { label: "Response Time", value: "6x", description: "Communication cycle improvement" },
    ],
    overview: &[
        ("Client", "Murphy Charitable Foundation Uganda"),
        ("Timeline", "6 months (2023)"),
        ("Role", "Product Designer"),
        ("Team", "2 designers (Emil, Sara), development team and PM (Rez)"),
        ("Platform", "iOS"),
        ("Tools", "Figma, Principle, UserTesting, Maze"),
    ],
    problem: Problem {
        statement: "Vulnerable children in Uganda, including orphans and those living in poverty, lacked meaningful connections to the outside world. The foundation's existing pen pal program faced logistical challenges with physical letter delivery and maintaining consistent communication.",
        goals: &[
            "Create a digital platform to serve 2000+ children in Uganda",
            "Reduce correspondence abandonment rates",
            "Make the connection between the children and the pen pals more engaging and meaningful",
        ],
    },
    research: Research {
        methods: &[
            ResearchMethod {
                title: "User Interviews",
                count: "60 participants",
                insights: "Children wanted simpler and more engaging ways to communicate with pen pals",
            },
            ResearchMethod {
                title: "Field Research",
                count: "5 regions in Uganda",
                insights: "Limited technology access - one device shared among 12 children",
            },
            ResearchMethod {
                title: "Program Analysis",
                count: "6 months of data",
                insights: "Need for secure payments for sponsors while protecting children's privacy",
            },
        ],
        key_findings: &[
            "Physical letter delivery was inconsistent and delayed meaningful connections",
            "Children needed secure ways to connect with sponsors while maintaining privacy and protection",
            "Sponsorship payment system needed to be integrated while keeping children's data secure",
            "Solution required working with limited internet access (one device per 12 children)",
            "Visual sharing of daily life was highly valued by both Ugandan children and international pen pals",
        ],
    },
    showcase: Some(ProductShowcase {
        title: "The Product",
        description: "The Pen Pal Magic App connects children in Uganda with international pen pals through an intuitive, accessible mobile interface.",
        screens: &PEN_PAL_SCREENS,
    }),
    links: &[
        ExternalLink { label: "Murphy Charitable Foundation Uganda", href: "https://murphycharity.org/" },
        ExternalLink { label: "Pen Pal Program Portal", href: "https://penpal.murphycharity.org/" },
    ],
    design_process: Some(DesignProcess {
        description: "Our comprehensive approach included extensive user testing with children in Uganda, focusing on language accessibility and ease of use. We conducted multiple testing phases to validate our design decisions and ensure the app would work effectively for both children and their guardians.",
        media: &PEN_PAL_PROCESS,
        deliverables: &[
            "Comprehensive research findings",
            "User testing analysis across all phases",
            "Design implementation recommendations",
            "Onboarding strategy documentation",
            "Language accessibility guidelines",
            "Guardian assistance protocols",
            "Final implementation plan",
        ],
    }),
    process: &[],
    solutions: Some(Solutions {
        description: "Based on our research and testing, we developed two key features to address the main communication challenges faced by the children.",
        features: &PEN_PAL_FEATURES,
    }),
    results: &[
        ResultMetric {
            label: "Program Reach",
            before: "500 children",
            after: "2000+ children",
            improvement: "+300%",
        },
        ResultMetric {
            label: "Message Exchange",
            before: "45 days avg.",
            after: "7 days avg.",
            improvement: "-84%",
        },
        ResultMetric {
            label: "Child Protection",
            before: "Basic procedures",
            after: "Advanced security",
            improvement: "Enhanced safety",
        },
        ResultMetric {
            label: "Sponsorship Rate",
            before: "32% of children",
            after: "68% of children",
            improvement: "+113%",
        },
        ResultMetric { label: "Digital Literacy", before: "Basic", after: "Intermediate", improvement: "+65%" },
    ],
    testimonials: &PEN_PAL_TESTIMONIALS,
    learnings: &[
        "Designing for limited connectivity required innovative approaches to offline functionality",
        "Visual communication tools were essential for overcoming language barriers",
        "User testing directly with children in Uganda provided invaluable insights",
        "Collaboration with local program coordinators was crucial for success",
    ],
    personal_growth: &[
        "First experience working with an international team, which provided valuable insights into cross-cultural collaboration",
        "Gained deep understanding of working within tight design schedules and managing project timelines effectively",
        "Learned to adapt communication styles and design approaches for different cultural contexts",
        "Developed skills in remote collaboration and asynchronous communication across time zones",
    ],
    next: NextProject { title: "Dream AI", slug: "Dream-Ai" },
};

// =============================================================================
// CDF INTERNAL PLATFORM
// =============================================================================

const DREAM_AI_ARCHITECTURE: [MediaItem; 2] = [
    MediaItem::image("/Dream-ai/Primary Sitemap.png", "Website Architecture Diagram")
        .captioned("Primary Sitemap", "Comprehensive sitemap showing platform organization")
        .with_details(
            "### Key Sections\n\n\
             - Primary Homepage with feature highlights\n\
             - Seven major operational sections\n\
             - Integrated support sections\n\
             - User journey mapping\n",
        ),
    MediaItem::image("/Dream-ai/Firsr design Home.png", "Homepage Initial Design")
        .captioned(
            "Homepage Wireframe",
            "Initial homepage design showcasing key sections and user flow",
        )
        .with_details(
            "### Homepage Sections\n\n\
             - Hero section with volunteer engagement focus\n\
             - Community impact showcase\n\
             - Volunteer opportunities\n\
             - Testimonials and feedback\n\
             - Team showcase\n\
             - FAQ section\n\
             - Newsletter signup\n\
             - Contact information\n",
        ),
];

const DREAM_AI_HR_FLOW: [MediaItem; 1] = [MediaItem::video("/Dream-ai/User-flow-HR.mp4", "HR AI User Flow Demo")
    .captioned(
        "HR Management System Flow",
        "Interactive walkthrough of the HR management system showing candidate screening, evaluation, and team leader assignment process",
    )
    .with_details(
        "### Key Features Demonstrated\n\n\
         - AI-powered candidate screening dashboard\n\
         - Automated skill matching and ranking\n\
         - Team leader assignment workflow\n\
         - Application status tracking\n\
         - Candidate evaluation metrics\n\
         - Automated communication system\n\
         - Multi-level approval process\n\
         - Integration with team management\n\n\
         ### Benefits\n\n\
         - Streamlined HR workflow with AI assistance\n\
         - Reduced manual screening time by 78%\n\
         - Improved candidate-role matching accuracy\n\
         - Enhanced collaboration between HR and team leaders\n",
    )];

const DREAM_AI_VOLUNTEER_FLOW: [MediaItem; 1] =
    [MediaItem::video("/Dream-ai/User-flow-Volunteer.mp4", "Volunteer Quick-Match Flow Demo")
        .captioned(
            "Volunteer Onboarding & Job Matching",
            "Demonstration of the quick and intuitive volunteer registration and job matching process",
        )
        .with_details(
            "### Key Features Demonstrated\n\n\
             - One-step registration process\n\
             - Smart job recommendations\n\
             - Quick apply functionality\n\
             - Skills-based matching\n\
             - Real-time opportunity updates\n\
             - Instant application tracking\n\
             - Personalized dashboard\n\
             - Mobile-optimized experience\n\n\
             ### User Benefits\n\n\
             - Find relevant opportunities in under 2 minutes\n\
             - No complex forms or lengthy processes\n\
             - Immediate access to available positions\n\
             - Clear status updates on applications\n",
        )];

const DREAM_AI_TEAM_LEADER_FLOW: [MediaItem; 1] =
    [MediaItem::video("/Dream-ai/User-flow-Team-leader.mp4", "Team Leader Workflow Demo")
        .captioned(
            "Team Task Management System",
            "Demonstration of the team leader interface for task management and automatic job posting creation",
        )
        .with_details(
            "### Key Features Demonstrated\n\n\
             - Intuitive task creation and assignment\n\
             - Team capacity monitoring\n\
             - Automatic job posting conversion\n\
             - Skill requirement mapping\n\
             - Resource allocation overview\n\
             - Team performance tracking\n\
             - Priority-based task management\n\
             - Integrated volunteer matching\n\n\
             ### Workflow Benefits\n\n\
             - Seamless transition from tasks to job postings\n\
             - Real-time team capacity insights\n\
             - Automated skill-based matching\n\
             - Reduced task allocation time\n\
             - Improved resource utilization\n",
        )];

const DREAM_AI: CaseStudy = CaseStudy {
    slug: "Dream-Ai",
    title: "CDF Internal Platform",
    subtitle: "Internal Enterprise Platform for Community Dreams Foundation",
    description: "As the sole designer working alongside 20 engineers, I designed three critical user flows for Community Dreams Foundation's internal enterprise platform. This confidential internal product streamlines operations across HR, volunteer coordination, and team leadership.",
    hero: Some(MediaItem::image("/Dream-ai/MacBook13.png", "MacBook showing Dream AI platform interface")),
    metrics: &[
        Metric { label: "Internal Users", value: "2200+", description: "Staff members using the platform daily" },
        Metric {
            label: "Teams",
            value: "60+",
            description: "Cross-functional teams supported all around the world",
        },
        Metric { label: "Processes", value: "35+", description: "Internal workflows optimized" },
    ],
    overview: &[
        ("Client", "Community Dreams Foundation (Internal)"),
        ("Timeline", "4 months (2023)"),
        ("Role", "Lead Product Designer"),
        ("Team", "20 engineers, 2 Product Owners, 1 Founder"),
        ("Platform", "Internal Web Application"),
        ("Tools", "Figma, FigJam, Click Up and Airtable"),
    ],
    problem: Problem {
        statement: "Community Dreams Foundation experienced rapid global expansion, growing to over 2200 staff members across 60+ teams worldwide. The traditional hiring processes couldn't keep up with this scale, leading to inefficiencies and missed opportunities. The organization needed an AI-powered solution to revolutionize their hiring process while ensuring their unique culture and values remained central to candidate selection.",
        goals: &[
            "Implement AI-driven candidate screening and matching for high-volume hiring",
            "Reduce time-to-hire while maintaining quality of cultural fit",
            "Create automated workflows for HR teams across different regions",
            "Build analytics dashboard for data-driven hiring decisions",
            "Ensure ethical AI implementation in the hiring process",
        ],
    },
    research: Research {
        methods: &[
            ResearchMethod {
                title: "HR Process Analysis",
                count: "3 interviews",
                insights: "Mapped current hiring workflows and identified AI opportunities",
            },
            ResearchMethod {
                title: "AI Ethics Workshop",
                count: "5 sessions",
                insights: "Developed guidelines for ethical AI use in hiring",
            },
            ResearchMethod {
                title: "Data Assessment",
                count: "6 months",
                insights: "Analyzed historical hiring data to train AI models",
            },
        ],
        key_findings: &[
            "Manual screening was taking 70% of HR team's time",
            "Cultural fit assessment needed human expertise but could be AI-assisted",
            "Different regions had varying hiring requirements and compliance needs",
            "Data quality was crucial for AI model accuracy",
            "Using AI for screening and matching candidates can save 90% of the time",
            "The platform can offer more than 1000 jobs every month",
        ],
    },
    showcase: None,
    links: &[],
    design_process: None,
    process: &[
        ProcessPhase {
            title: "Website Architecture & Sitemap",
            description: "Created a comprehensive sitemap organizing the platform into seven key sections, each with specific functionalities and user flows. The architecture supports both informational content and complex operational features like volunteer management and project tracking.",
            deliverables: &[
                "Primary Homepage with feature highlights and navigation",
                "Seven major operational sections",
                "Integrated support and information sections",
                "User journey mapping across all sections",
            ],
            media: PhaseMedia::Carousel(&DREAM_AI_ARCHITECTURE),
        },
        ProcessPhase {
            title: "HR AI User Flow",
            description: "Designed an intuitive workflow for HR managers and administrators to efficiently manage the candidate screening and selection process. The system leverages AI to streamline candidate evaluation while maintaining human oversight for critical decisions.",
            deliverables: &[
                "AI-powered candidate screening system",
                "Automated skill matching algorithm",
                "Team leader assignment workflow",
                "Integrated communication system",
                "Performance analytics dashboard",
            ],
            media: PhaseMedia::Carousel(&DREAM_AI_HR_FLOW),
        },
        ProcessPhase {
            title: "Volunteer Quick-Match Flow",
            description: "Developed a streamlined volunteer onboarding and job matching system that allows potential volunteers to quickly find and apply for opportunities that match their skills and interests. The focus is on making the process as simple and efficient as possible.",
            deliverables: &[
                "Simplified volunteer registration",
                "AI-powered job matching system",
                "One-click application process",
                "Real-time status tracking",
                "Mobile-responsive interface",
            ],
            media: PhaseMedia::Carousel(&DREAM_AI_VOLUNTEER_FLOW),
        },
        ProcessPhase {
            title: "Team Leader Task Management Flow",
            description: "Designed an intelligent task management system that enables team leaders to efficiently assign work and automatically convert unassigned tasks into job postings. This innovative approach ensures no task goes uncovered while expanding the volunteer pool as needed.",
            deliverables: &[
                "Dynamic task management interface",
                "Automated job posting generation",
                "Team capacity monitoring system",
                "Skill-based task allocation",
                "Resource optimization dashboard",
            ],
            media: PhaseMedia::Carousel(&DREAM_AI_TEAM_LEADER_FLOW),
        },
    ],
    solutions: None,
    results: &[
        ResultMetric {
            label: "Screening Time",
            before: "45 min/candidate",
            after: "10 min/candidate",
            improvement: "-78%",
        },
        ResultMetric { label: "Quality of Hire", before: "75% fit", after: "92% fit", improvement: "+23%" },
        ResultMetric { label: "Time to Hire", before: "45 days", after: "15 days", improvement: "-67%" },
        ResultMetric {
            label: "System Response Time",
            before: "2.5 seconds",
            after: "0.5 seconds",
            improvement: "-80%",
        },
        ResultMetric {
            label: "Task Assignment Speed",
            before: "15 minutes",
            after: "3 minutes",
            improvement: "-80%",
        },
        ResultMetric {
            label: "Job Posting Creation",
            before: "30 minutes",
            after: "5 minutes",
            improvement: "-83%",
        },
    ],
    testimonials: &[],
    learnings: &[
        "AI must be carefully tuned to avoid bias in the hiring process",
        "Human oversight remains crucial for maintaining ethical standards",
        "Data quality and regular model retraining are essential",
        "Cultural fit can be quantified but requires careful consideration",
    ],
    personal_growth: &[],
    next: NextProject { title: "Afrika App", slug: "Afrika" },
};

static CASE_STUDIES: [CaseStudy; 4] = [AFRIKA, EUROVOYAGE, PEN_PAL, DREAM_AI];

/// Case studies in home-page order.
pub fn case_studies() -> &'static [CaseStudy] {
    &CASE_STUDIES
}
