use crate::domain::entities::complaint::{
    Complaint, ComplaintAuthor, ComplaintStatus, ComplaintSubject, ComplaintView, NewComplaint,
};
use uuid::Uuid;

#[test]
fn test_subject_labels_round_trip_through_from_str() {
    for subject in ComplaintSubject::ALL {
        assert_eq!(subject.label().parse::<ComplaintSubject>().unwrap(), subject);
    }
    assert!("Otro".parse::<ComplaintSubject>().is_err());
}

#[test]
fn test_subject_deserializes_from_label() {
    let subject: ComplaintSubject = serde_json::from_str("\"Fraudes o estafas\"").unwrap();
    assert_eq!(subject, ComplaintSubject::Fraud);
    assert!(serde_json::from_str::<ComplaintSubject>("\"Fraud\"").is_err());
}

#[test]
fn test_new_complaint_is_open() {
    let complaint = Complaint::new(NewComplaint {
        user_id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        complaint_subject: ComplaintSubject::PoorService,
        complaint_description: "Nunca llegaron a la instalación".to_string(),
    });
    assert_eq!(complaint.complaint_status, ComplaintStatus::Open);
}

#[test]
fn test_view_flattens_complaint() {
    let complaint = Complaint::new(NewComplaint {
        user_id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        complaint_subject: ComplaintSubject::DefectiveProducts,
        complaint_description: "Inversor dañado".to_string(),
    });
    let view = ComplaintView {
        complaint,
        user: Some(ComplaintAuthor {
            first_name: "Ana".to_string(),
            last_name: "García".to_string(),
        }),
    };

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["complaintSubject"], "Productos Defectuosos");
    assert_eq!(json["complaintStatus"], "open");
    assert_eq!(json["user"]["firstName"], "Ana");
}
