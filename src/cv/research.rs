//! The research résumé variant.
//!
//! Starts from the master résumé and replaces the summary, technologies,
//! education and projects; work experience and interests carry over.

use super::types::{Education, Project, Resume, Technologies};
use super::master;

const SUMMARY: &str = "Senior machine learning engineer with 10 years of experience in computer vision, scalable \
     data pipelines, and deploying production-grade deep learning models. Expert in Python, \
     proficient in C++, with strong foundations in PyTorch, ONNX, multi-processing, and \
     asynchronous programming. Focused on research-driven model evaluation, custom metric \
     development, and building tools to improve model robustness and quality. Experienced in \
     hybrid and remote teams, with open-source and competitive machine learning contributions.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn technologies() -> Technologies {
    Technologies::from([
        (
            "Languages".to_string(),
            strings(&[
                "Python (expert)",
                "C++ (proficient, CMake, Conan)",
                "Rust (working knowledge)",
            ]),
        ),
        (
            "Machine Learning".to_string(),
            strings(&[
                "PyTorch",
                "TensorFlow",
                "NumPy",
                "Pandas",
                "Dask",
                "Jupyter",
                "Streamlit",
                "altair",
                "scikit-learn",
            ]),
        ),
        (
            "Data Engineering".to_string(),
            strings(&[
                "Azure DevOps",
                "GitHub Actions",
                "SQL",
                "Weights &amp; Biases",
                "AWS S3",
            ]),
        ),
        (
            "Other".to_string(),
            strings(&[
                "multi-GPU training",
                "model quantization (fp16, int8)",
                "software design patterns",
                "data structures",
                "algorithms",
            ]),
        ),
    ])
}

fn education() -> Vec<Education> {
    vec![
        Education::Institution {
            qualification: "C++ Development Course".to_string(),
            provider: "Udacity".to_string(),
            dates: "2025 (ongoing)".to_string(),
        },
        Education::Institution {
            qualification: "Object Tracking Course".to_string(),
            provider: "Udacity".to_string(),
            dates: "2024 (ongoing)".to_string(),
        },
        Education::Institution {
            qualification: "AI and ML Development Courses".to_string(),
            provider: "Udacity".to_string(),
            dates: "2017".to_string(),
        },
        Education::Institution {
            qualification: "Software Engineering Diploma".to_string(),
            provider: "Surgut State University".to_string(),
            dates: "2009&mdash;2014".to_string(),
        },
        Education::Comment {
            content: "<em>Equivalent to a Master's degree in many European countries</em>"
                .to_string(),
        },
    ]
}

fn projects() -> Vec<Project> {
    master::projects()
}

/// Build the research résumé on top of the master dataset
pub fn resume() -> Resume {
    let mut resume = master::resume();
    resume.summary = SUMMARY.to_string();
    resume.technologies = technologies();
    resume.education = education();
    resume.projects = projects();
    resume
}
