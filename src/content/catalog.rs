use super::{Feature, Icon, Section, Stat};

pub const HERO_TITLE: &str = "Cloud DevOps";
pub const HERO_TAGLINE: &str = "Practice Project";
pub const HERO_SUBTITLE: &str =
    "Exploring modern development workflows with style and sophistication";
pub const CTA_LABEL: &str = "Get Started";

pub const MANUAL_TITLE: &str = "CI/CD & Cloud DevOps Manual";

pub const FOOTER: &str = "© 2025 Cloud DevOps Practice. Built with ♥ and React.";

pub const MANUAL_SECTIONS: &[Section] = &[
    Section {
        title: "What is CI/CD?",
        icon: Icon::GitAlt,
        content: "
        Continuous Integration/Continuous Deployment (CI/CD) is a DevOps practice that automates the integration and deployment of code changes.

        **Continuous Integration (CI):**
        • Developers frequently merge code changes into a central repository
        • Automated builds and tests run on every commit
        • Early detection of integration issues
        • Faster feedback loops for development teams

        **Continuous Deployment (CD):**
        • Automated deployment of tested code to production
        • Reduced manual intervention and human errors
        • Faster time-to-market for new features
        • Consistent and reliable deployment processes
      ",
    },
    Section {
        title: "Cloud DevOps Benefits",
        icon: Icon::Cloud,
        content: "
        Cloud DevOps combines cloud computing with DevOps practices for scalable, efficient software delivery.

        **Key Benefits:**
        • **Scalability**: Auto-scaling infrastructure based on demand
        • **Cost Efficiency**: Pay-as-you-use model reduces operational costs
        • **Global Reach**: Deploy applications worldwide with edge locations
        • **High Availability**: Built-in redundancy and disaster recovery
        • **Security**: Enterprise-grade security with compliance standards
        • **Monitoring**: Real-time insights and observability tools
      ",
    },
    Section {
        title: "GitHub Actions Workflow",
        icon: Icon::Bolt,
        content: "
        GitHub Actions provides powerful automation directly in your repository.

        **Core Concepts:**
        • **Workflows**: Automated processes triggered by events
        • **Jobs**: Sets of steps that execute on the same runner
        • **Steps**: Individual tasks within a job
        • **Actions**: Reusable units of code

        **Common Use Cases:**
        • Automated testing on pull requests
        • Building and publishing Docker images
        • Deploying to cloud platforms
        • Code quality checks and security scans
        • Notifications and integrations
      ",
    },
    Section {
        title: "Container Orchestration",
        icon: Icon::Docker,
        content: "
        Containers and orchestration platforms enable consistent, scalable deployments.

        **Docker Benefits:**
        • Consistent environments across development stages
        • Lightweight and portable applications
        • Simplified dependency management
        • Faster startup times compared to VMs

        **Kubernetes Features:**
        • Automated deployment and scaling
        • Service discovery and load balancing
        • Self-healing and rolling updates
        • Configuration and secret management
        • Multi-cloud and hybrid deployments
      ",
    },
    Section {
        title: "AWS Cloud Services",
        icon: Icon::Aws,
        content: "
        Amazon Web Services provides comprehensive cloud infrastructure for DevOps.

        **Key Services:**
        • **EC2**: Scalable virtual servers in the cloud
        • **ECS/EKS**: Container orchestration services
        • **Lambda**: Serverless computing platform
        • **CodePipeline**: Continuous delivery service
        • **CloudFormation**: Infrastructure as Code
        • **CloudWatch**: Monitoring and observability
        • **S3**: Object storage for artifacts and static assets
        • **RDS**: Managed database services
      ",
    },
    Section {
        title: "Best Practices",
        icon: Icon::CheckCircle,
        content: "
        Essential practices for successful CI/CD and Cloud DevOps implementation.

        **CI/CD Best Practices:**
        • Maintain a single source of truth in version control
        • Automate everything: builds, tests, deployments
        • Test early and often with comprehensive test suites
        • Use feature flags for safe deployments
        • Monitor and measure deployment metrics

        **Cloud DevOps Best Practices:**
        • Infrastructure as Code (IaC) for reproducible environments
        • Implement proper security and access controls
        • Use monitoring and alerting for proactive issue detection
        • Practice disaster recovery and backup strategies
        • Optimize costs with resource management
      ",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Cloud DevOps",
        description: "Mastering modern deployment strategies with CI/CD pipelines",
        icon: Icon::Cloud,
    },
    Feature {
        title: "GitHub Actions",
        description: "Automating workflows for seamless development cycles",
        icon: Icon::Bolt,
    },
    Feature {
        title: "Frontend Excellence",
        description: "Creating beautiful, responsive user interfaces",
        icon: Icon::Palette,
    },
    Feature {
        title: "Performance",
        description: "Optimized for speed and user experience",
        icon: Icon::Rocket,
    },
];

pub const TECH_STACK: &[&str] = &["React", "Vite", "CSS3", "GitHub Actions", "DevOps", "Cloud"];

pub const STATS: &[Stat] = &[
    Stat {
        icon: Icon::CheckCircle,
        label: "Responsive",
    },
    Stat {
        icon: Icon::Tachometer,
        label: "Fast Loading",
    },
    Stat {
        icon: Icon::Magic,
        label: "Modern Design",
    },
];
